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

use x86_64::PhysAddr;
use super::constants::*;
use super::error::{FrameAllocError, FrameResult};
use super::source::FrameSource;
use super::types::FrameStats;

/// Bitmap allocator over a single physical region `[start, end)`.
///
/// One bit per frame, set while the frame is handed out. Allocation is
/// first-fit starting from the slot after the last allocation.
#[derive(Debug)]
pub struct RegionFrameAllocator {
    start: u64,
    frame_count: usize,
    bitmap: [u64; BITMAP_WORDS],
    used: usize,
    next_hint: usize,
    initialized: bool,
}

impl RegionFrameAllocator {
    pub const fn new() -> Self {
        Self {
            start: 0,
            frame_count: 0,
            bitmap: [0; BITMAP_WORDS],
            used: 0,
            next_hint: 0,
            initialized: false,
        }
    }

    pub fn init(&mut self, start: PhysAddr, end: PhysAddr) -> FrameResult<()> {
        if self.initialized {
            return Err(FrameAllocError::AlreadyInitialized);
        }
        let (start, end) = (start.as_u64(), end.as_u64());
        if start >= end || start < MIN_FRAME_ADDRESS {
            return Err(FrameAllocError::InvalidRegion);
        }
        if !is_frame_aligned(start) || !is_frame_aligned(end) {
            return Err(FrameAllocError::RegionNotAligned);
        }
        let frame_count = frames_in_range(start, end);
        if frame_count > MAX_REGION_FRAMES {
            return Err(FrameAllocError::RegionTooLarge);
        }

        self.start = start;
        self.frame_count = frame_count;
        self.bitmap = [0; BITMAP_WORDS];
        self.used = 0;
        self.next_hint = 0;
        self.initialized = true;
        crate::log_dbg!(
            "[ALLOC] region {:#x}..{:#x} managed ({} frames)",
            start, end, frame_count
        );
        Ok(())
    }

    pub fn alloc(&mut self) -> Option<PhysAddr> {
        if !self.initialized || self.used == self.frame_count {
            return None;
        }
        for offset in 0..self.frame_count {
            let idx = (self.next_hint + offset) % self.frame_count;
            if !self.bit_test(idx) {
                self.bit_set(idx);
                self.used += 1;
                self.next_hint = (idx + 1) % self.frame_count;
                return Some(PhysAddr::new(self.frame_address(idx)));
            }
        }
        None
    }

    pub fn dealloc(&mut self, addr: PhysAddr) -> FrameResult<()> {
        if !self.initialized {
            return Err(FrameAllocError::NotInitialized);
        }
        let idx = self.frame_index(addr)?;
        if !self.bit_test(idx) {
            return Err(FrameAllocError::DoubleFree);
        }
        self.bit_clear(idx);
        self.used -= 1;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether `addr` is a currently allocated frame of this region.
    pub fn is_allocated(&self, addr: PhysAddr) -> bool {
        self.initialized && self.frame_index(addr).map_or(false, |idx| self.bit_test(idx))
    }

    pub fn managed_range(&self) -> Option<(PhysAddr, PhysAddr)> {
        if !self.initialized {
            return None;
        }
        let end = self.start + (self.frame_count as u64) * FRAME_SIZE;
        Some((PhysAddr::new(self.start), PhysAddr::new(end)))
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats::new(self.frame_count, self.used)
    }

    pub fn total_frames(&self) -> usize {
        self.frame_count
    }

    pub fn used_frames(&self) -> usize {
        self.used
    }

    pub fn free_frames(&self) -> usize {
        self.frame_count - self.used
    }

    fn frame_address(&self, idx: usize) -> u64 {
        self.start + (idx as u64) * FRAME_SIZE
    }

    fn frame_index(&self, addr: PhysAddr) -> FrameResult<usize> {
        let addr = addr.as_u64();
        if !is_frame_aligned(addr) {
            return Err(FrameAllocError::AddressNotAligned);
        }
        if addr < self.start {
            return Err(FrameAllocError::AddressOutOfRange);
        }
        let idx = ((addr - self.start) / FRAME_SIZE) as usize;
        if idx >= self.frame_count {
            return Err(FrameAllocError::AddressOutOfRange);
        }
        Ok(idx)
    }

    #[inline]
    fn bit_test(&self, idx: usize) -> bool {
        self.bitmap[idx / BITS_PER_WORD] & (1u64 << (idx % BITS_PER_WORD)) != 0
    }

    #[inline]
    fn bit_set(&mut self, idx: usize) {
        self.bitmap[idx / BITS_PER_WORD] |= 1u64 << (idx % BITS_PER_WORD);
    }

    #[inline]
    fn bit_clear(&mut self, idx: usize) {
        self.bitmap[idx / BITS_PER_WORD] &= !(1u64 << (idx % BITS_PER_WORD));
    }
}

impl Default for RegionFrameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for RegionFrameAllocator {
    fn is_ready(&self) -> bool {
        self.initialized
    }

    fn allocate_page(&mut self) -> Option<PhysAddr> {
        self.alloc()
    }

    fn free_page(&mut self, page: PhysAddr) -> FrameResult<()> {
        self.dealloc(page)
    }
}
