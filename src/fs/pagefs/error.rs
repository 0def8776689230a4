// NØNOS Operating System
// Copyright (C) 2026 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    InvalidName,
    TableFull,
    AllocatorUnavailable,
    AllocationFailed,
    NotFound,
}

impl FsError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidName => "Invalid name: length must be 1..=16 bytes",
            Self::TableFull => "File table full",
            Self::AllocatorUnavailable => "Frame allocator not ready",
            Self::AllocationFailed => "No physical page available",
            Self::NotFound => "File not found",
        }
    }

    pub fn to_errno(self) -> i32 {
        match self {
            Self::InvalidName => -22,
            Self::TableFull => -23,
            Self::AllocatorUnavailable => -11,
            Self::AllocationFailed => -12,
            Self::NotFound => -2,
        }
    }

    /// Whether retrying the same call later can succeed without the caller
    /// changing its arguments.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::TableFull | Self::AllocatorUnavailable | Self::AllocationFailed
        )
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<FsError> for &'static str {
    fn from(err: FsError) -> Self {
        err.as_str()
    }
}

pub type FsResult<T> = Result<T, FsError>;
