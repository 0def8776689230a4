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

use spin::{Mutex, MutexGuard};
use x86_64::PhysAddr;
use super::error::FrameResult;
use super::region::RegionFrameAllocator;
use super::source::FrameSource;
use super::types::FrameStats;

/// Kernel-wide allocator behind a spinlock.
///
/// `&LockedFrameAllocator` is itself a `FrameSource`, so subsystems can hold
/// a shared reference to a `static` instance.
pub struct LockedFrameAllocator {
    inner: Mutex<RegionFrameAllocator>,
}

impl LockedFrameAllocator {
    pub const fn new() -> Self {
        Self { inner: Mutex::new(RegionFrameAllocator::new()) }
    }

    pub fn init(&self, start: PhysAddr, end: PhysAddr) -> FrameResult<()> {
        self.inner.lock().init(start, end)
    }

    pub fn lock(&self) -> MutexGuard<'_, RegionFrameAllocator> {
        self.inner.lock()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.lock().is_initialized()
    }

    pub fn stats(&self) -> FrameStats {
        self.inner.lock().stats()
    }
}

impl Default for LockedFrameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for &LockedFrameAllocator {
    fn is_ready(&self) -> bool {
        self.inner.lock().is_initialized()
    }

    fn allocate_page(&mut self) -> Option<PhysAddr> {
        self.inner.lock().alloc()
    }

    fn free_page(&mut self, page: PhysAddr) -> FrameResult<()> {
        self.inner.lock().dealloc(page)
    }
}
