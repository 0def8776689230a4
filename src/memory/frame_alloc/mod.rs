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

//! NØNOS Physical Frame Allocator
//!
//! The page supply consumed by the file table. `FrameSource` is the
//! contract; `RegionFrameAllocator` manages one page-aligned physical
//! region with a bitmap and `LockedFrameAllocator` shares it kernel-wide.

pub mod constants;
pub mod error;
mod locked;
mod region;
mod source;
mod types;

pub use constants::*;
pub use error::{FrameAllocError, FrameResult};
pub use locked::LockedFrameAllocator;
pub use region::RegionFrameAllocator;
pub use source::FrameSource;
pub use types::FrameStats;
