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

use core::ptr;
use x86_64::PhysAddr;
use crate::memory::frame_alloc::FRAME_SIZE_USIZE;

/// Bounded byte copies into and out of single physical pages.
///
/// Accesses never cross the end of the page: a request for `len` bytes at
/// `offset` copies `clip_to_page(offset, len)` bytes and returns that count.
pub trait PhysMemory {
    fn read(&self, page: PhysAddr, offset: usize, dst: &mut [u8]) -> usize;

    fn write(&mut self, page: PhysAddr, offset: usize, src: &[u8]) -> usize;
}

/// Number of bytes of a `len`-byte access at `offset` that fall inside one page.
#[inline]
pub const fn clip_to_page(offset: usize, len: usize) -> usize {
    if offset >= FRAME_SIZE_USIZE {
        return 0;
    }
    let room = FRAME_SIZE_USIZE - offset;
    if len < room { len } else { room }
}

/// Physical memory visible at a fixed virtual offset.
///
/// Page `p` is reached at virtual address `p + offset`. An offset of zero is
/// flat identity addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectMap {
    offset: u64,
}

impl DirectMap {
    /// # Safety
    ///
    /// Every page later passed to this accessor must be mapped readable and
    /// writable at `page + offset`, and must not be aliased by live Rust
    /// references while a copy is in progress.
    pub const unsafe fn new(offset: u64) -> Self {
        Self { offset }
    }

    /// # Safety
    ///
    /// Same contract as [`DirectMap::new`] with physical == virtual.
    pub const unsafe fn identity() -> Self {
        Self { offset: 0 }
    }

    pub const fn offset(&self) -> u64 {
        self.offset
    }

    #[inline]
    fn byte_ptr(&self, page: PhysAddr, offset: usize) -> *mut u8 {
        page.as_u64().wrapping_add(self.offset).wrapping_add(offset as u64) as usize as *mut u8
    }
}

impl PhysMemory for DirectMap {
    fn read(&self, page: PhysAddr, offset: usize, dst: &mut [u8]) -> usize {
        let count = clip_to_page(offset, dst.len());
        if count == 0 {
            return 0;
        }
        // SAFETY: the constructor contract guarantees the page is mapped at
        // `page + offset`; `count` keeps the copy inside that page.
        unsafe {
            ptr::copy_nonoverlapping(self.byte_ptr(page, offset), dst.as_mut_ptr(), count);
        }
        count
    }

    fn write(&mut self, page: PhysAddr, offset: usize, src: &[u8]) -> usize {
        let count = clip_to_page(offset, src.len());
        if count == 0 {
            return 0;
        }
        // SAFETY: as in `read`; the destination lies within one mapped page.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), self.byte_ptr(page, offset), count);
        }
        count
    }
}
