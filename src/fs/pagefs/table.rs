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

use crate::memory::frame_alloc::FrameSource;
use crate::memory::physmem::PhysMemory;
use crate::{log_dbg, log_warn};
use super::constants::{MAX_FILES, PAGE_SIZE};
use super::error::{FsError, FsResult};
use super::types::{FileHandle, FileLocation, FileName, FileSlot, SlotSnapshot, TableUsage};

/// Fixed table of [`MAX_FILES`] slots plus the collaborators it needs: a
/// page supply and a raw memory accessor.
///
/// Operations run to completion under `&mut self`; wrap in
/// [`SharedFileTable`](super::SharedFileTable) when several contexts need
/// access.
pub struct FileTable<A, M> {
    slots: [FileSlot; MAX_FILES],
    frames: A,
    memory: M,
}

impl<A: FrameSource, M: PhysMemory> FileTable<A, M> {
    /// Builds a table with every slot unused.
    pub const fn new(frames: A, memory: M) -> Self {
        Self { slots: [FileSlot::EMPTY; MAX_FILES], frames, memory }
    }

    /// Resets every slot to unused. Meant to run once at boot; pages still
    /// referenced by used slots are not handed back to the allocator.
    pub fn init(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = FileSlot::EMPTY;
        }
        log_dbg!("[PAGEFS] table reset ({} slots)", MAX_FILES);
    }

    pub const fn capacity(&self) -> usize {
        MAX_FILES
    }

    /// Exact-match lookup: same length, same bytes, case-sensitive.
    pub fn lookup(&self, name: &[u8]) -> FsResult<FileLocation> {
        let idx = self.find_by_name(name).ok_or(FsError::NotFound)?;
        let slot = &self.slots[idx];
        Ok(FileLocation { page: slot.page(), size: slot.size() })
    }

    pub fn stat(&self, name: &[u8]) -> FsResult<SlotSnapshot> {
        let idx = self.find_by_name(name).ok_or(FsError::NotFound)?;
        Ok(SlotSnapshot::capture(idx, &self.slots[idx]))
    }

    /// Creates `name` or replaces its content.
    ///
    /// `data` beyond [`PAGE_SIZE`] bytes is dropped and the call still
    /// succeeds. An existing file keeps its page; bytes past the new size
    /// are left in place and are unreachable through the table. A new file
    /// becomes visible only after its page is allocated and filled; any
    /// failure leaves the table untouched.
    pub fn write(&mut self, name: &[u8], data: &[u8]) -> FsResult<FileHandle> {
        let name = FileName::new(name)?;
        let data = if data.len() > PAGE_SIZE {
            log_warn!(
                "[PAGEFS] write to '{}' truncated from {} to {} bytes",
                name, data.len(), PAGE_SIZE
            );
            &data[..PAGE_SIZE]
        } else {
            data
        };

        if let Some(idx) = self.find_by_name(name.as_bytes()) {
            let slot = &mut self.slots[idx];
            let written = self.memory.write(slot.page(), 0, data);
            slot.set_size(written);
            return Ok(FileHandle::new(idx, slot.generation()));
        }

        let idx = self.find_free_slot().ok_or_else(|| {
            log_dbg!("[PAGEFS] no free slot for '{}'", name);
            FsError::TableFull
        })?;
        if !self.frames.is_ready() {
            log_warn!("[PAGEFS] frame allocator not ready, cannot create '{}'", name);
            return Err(FsError::AllocatorUnavailable);
        }
        let page = match self.frames.allocate_page() {
            Some(page) if page.as_u64() != 0 => page,
            _ => {
                log_warn!("[PAGEFS] page allocation failed for '{}'", name);
                return Err(FsError::AllocationFailed);
            }
        };

        let written = self.memory.write(page, 0, data);
        let slot = &mut self.slots[idx];
        slot.occupy(&name, page, written);
        log_dbg!("[PAGEFS] created '{}' in slot {} at {:#x}", name, idx, page.as_u64());
        Ok(FileHandle::new(idx, slot.generation()))
    }

    /// Deletes `name` and hands its page back to the allocator.
    pub fn remove(&mut self, name: &[u8]) -> FsResult<()> {
        let idx = self.find_by_name(name).ok_or(FsError::NotFound)?;
        let page = self.slots[idx].page();
        if let Err(e) = self.frames.free_page(page) {
            log_warn!("[PAGEFS] reclaim of page {:#x} failed: {}", page.as_u64(), e);
        }
        self.slots[idx].release();
        log_dbg!("[PAGEFS] removed slot {}", idx);
        Ok(())
    }

    /// Copies up to `buf.len()` bytes of the file's content into `buf` and
    /// returns how many were copied.
    pub fn read(&self, name: &[u8], buf: &mut [u8]) -> FsResult<usize> {
        let location = self.lookup(name)?;
        let count = location.size.min(buf.len());
        Ok(self.memory.read(location.page, 0, &mut buf[..count]))
    }

    /// Raw metadata of slot `index`, used or not; `None` past the capacity.
    pub fn entry(&self, index: usize) -> Option<SlotSnapshot> {
        self.slots.get(index).map(|slot| SlotSnapshot::capture(index, slot))
    }

    /// Used slots in index order. Index order is not creation order.
    pub fn entries(&self) -> impl Iterator<Item = SlotSnapshot> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_used())
            .map(|(idx, slot)| SlotSnapshot::capture(idx, slot))
    }

    /// Snapshot of the slot `handle` points at, if it still holds the same file.
    pub fn resolve(&self, handle: FileHandle) -> Option<SlotSnapshot> {
        let slot = self.slots.get(handle.index())?;
        if slot.is_used() && slot.generation() == handle.generation() {
            Some(SlotSnapshot::capture(handle.index(), slot))
        } else {
            None
        }
    }

    pub fn usage(&self) -> TableUsage {
        let (used_slots, bytes_stored) = self
            .slots
            .iter()
            .filter(|slot| slot.is_used())
            .fold((0, 0), |(count, bytes), slot| (count + 1, bytes + slot.size()));
        TableUsage { used_slots, free_slots: MAX_FILES - used_slots, bytes_stored }
    }

    pub fn slots(&self) -> &[FileSlot; MAX_FILES] {
        &self.slots
    }

    pub fn frames(&self) -> &A {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut A {
        &mut self.frames
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn into_parts(self) -> (A, M) {
        (self.frames, self.memory)
    }

    fn find_by_name(&self, name: &[u8]) -> Option<usize> {
        if FileName::new(name).is_err() {
            return None;
        }
        self.slots.iter().position(|slot| slot.matches(name))
    }

    fn find_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.is_used())
    }
}
