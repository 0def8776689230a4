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

use spin::Mutex;
use crate::memory::frame_alloc::FrameSource;
use crate::memory::physmem::PhysMemory;
use super::constants::MAX_FILES;
use super::error::FsResult;
use super::table::FileTable;
use super::types::{FileHandle, FileLocation, SlotSnapshot, TableUsage};

/// File table behind one table-wide spinlock.
///
/// Each call holds the lock for its whole duration, so a write or remove
/// (including its allocator traffic) is atomic with respect to every other
/// call.
pub struct SharedFileTable<A, M> {
    inner: Mutex<FileTable<A, M>>,
}

impl<A: FrameSource, M: PhysMemory> SharedFileTable<A, M> {
    pub const fn new(frames: A, memory: M) -> Self {
        Self { inner: Mutex::new(FileTable::new(frames, memory)) }
    }

    pub const fn from_table(table: FileTable<A, M>) -> Self {
        Self { inner: Mutex::new(table) }
    }

    /// Runs `f` with exclusive access to the table.
    pub fn with<R>(&self, f: impl FnOnce(&mut FileTable<A, M>) -> R) -> R {
        let mut table = self.inner.lock();
        f(&mut *table)
    }

    pub fn init(&self) {
        self.inner.lock().init();
    }

    pub const fn capacity(&self) -> usize {
        MAX_FILES
    }

    pub fn lookup(&self, name: &[u8]) -> FsResult<FileLocation> {
        self.inner.lock().lookup(name)
    }

    pub fn stat(&self, name: &[u8]) -> FsResult<SlotSnapshot> {
        self.inner.lock().stat(name)
    }

    pub fn write(&self, name: &[u8], data: &[u8]) -> FsResult<FileHandle> {
        self.inner.lock().write(name, data)
    }

    pub fn remove(&self, name: &[u8]) -> FsResult<()> {
        self.inner.lock().remove(name)
    }

    pub fn read(&self, name: &[u8], buf: &mut [u8]) -> FsResult<usize> {
        self.inner.lock().read(name, buf)
    }

    pub fn entry(&self, index: usize) -> Option<SlotSnapshot> {
        self.inner.lock().entry(index)
    }

    pub fn resolve(&self, handle: FileHandle) -> Option<SlotSnapshot> {
        self.inner.lock().resolve(handle)
    }

    pub fn usage(&self) -> TableUsage {
        self.inner.lock().usage()
    }

    pub fn into_inner(self) -> FileTable<A, M> {
        self.inner.into_inner()
    }
}
