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
pub enum FrameAllocError {
    OutOfFrames,
    NotInitialized,
    AlreadyInitialized,
    InvalidRegion,
    RegionNotAligned,
    RegionTooLarge,
    AddressOutOfRange,
    AddressNotAligned,
    DoubleFree,
}

impl FrameAllocError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfFrames => "No physical frames available",
            Self::NotInitialized => "Frame allocator not initialized",
            Self::AlreadyInitialized => "Frame allocator already initialized",
            Self::InvalidRegion => "Invalid memory region: start >= end or below minimum address",
            Self::RegionNotAligned => "Memory region boundaries not page-aligned",
            Self::RegionTooLarge => "Memory region exceeds allocator capacity",
            Self::AddressOutOfRange => "Frame address out of range",
            Self::AddressNotAligned => "Frame address not page-aligned",
            Self::DoubleFree => "Double free detected",
        }
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OutOfFrames | Self::AlreadyInitialized)
    }

    pub fn indicates_corruption(&self) -> bool {
        matches!(
            self,
            Self::DoubleFree | Self::AddressOutOfRange | Self::AddressNotAligned
        )
    }
}

impl fmt::Display for FrameAllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub type FrameResult<T> = Result<T, FrameAllocError>;
