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

//! NØNOS page-backed file table.
//!
//! A fixed table of short names, each bound to one physical page obtained
//! from a frame allocator. Content lives directly in the page; the table
//! only records name, size and page address.

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod log;
pub mod fs;
pub mod memory;

pub use fs::pagefs::{
    FileHandle, FileLocation, FileName, FileSlot, FileTable, FsError, FsResult,
    SharedFileTable, SlotSnapshot, TableUsage, MAX_FILES, MAX_NAME_LEN, PAGE_SIZE,
};
pub use memory::frame_alloc::{
    FrameAllocError, FrameResult, FrameSource, FrameStats, LockedFrameAllocator,
    RegionFrameAllocator,
};
pub use memory::physmem::{DirectMap, PhysMemory};
