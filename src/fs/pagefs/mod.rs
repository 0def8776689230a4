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

//! Page-backed file table.
//!
//! Up to [`MAX_FILES`] files, each a name of 1..=[`MAX_NAME_LEN`] bytes bound
//! to exactly one physical page. Writes larger than a page are clipped to
//! [`PAGE_SIZE`] bytes without reporting an error. Volatile: nothing
//! survives a restart.

mod constants;
mod error;
mod shared;
mod table;
mod types;

pub use constants::{MAX_FILES, MAX_NAME_LEN, MAX_TOTAL_CONTENT, PAGE_SIZE};
pub use error::{FsError, FsResult};
pub use shared::SharedFileTable;
pub use table::FileTable;
pub use types::{FileHandle, FileLocation, FileName, FileSlot, SlotSnapshot, TableUsage};
