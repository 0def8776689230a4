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
use x86_64::PhysAddr;
use super::constants::MAX_NAME_LEN;
use super::error::{FsError, FsResult};

// ============================================================================
// FILE NAME
// ============================================================================

/// Validated file name: 1..=16 raw bytes, compared by length and content.
///
/// Unused trailing storage is always zero, so two equal names are also equal
/// byte-for-byte in memory.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileName {
    bytes: [u8; MAX_NAME_LEN],
    len: u8,
}

impl FileName {
    pub fn new(name: &[u8]) -> FsResult<Self> {
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(FsError::InvalidName);
        }
        let mut bytes = [0u8; MAX_NAME_LEN];
        bytes[..name.len()].copy_from_slice(name);
        Ok(Self { bytes, len: name.len() as u8 })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Never true for a constructed name.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }
}

impl TryFrom<&[u8]> for FileName {
    type Error = FsError;

    fn try_from(name: &[u8]) -> FsResult<Self> {
        Self::new(name)
    }
}

impl TryFrom<&str> for FileName {
    type Error = FsError;

    fn try_from(name: &str) -> FsResult<Self> {
        Self::new(name.as_bytes())
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bytes().escape_ascii())
    }
}

impl fmt::Debug for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileName(\"{}\")", self.as_bytes().escape_ascii())
    }
}

// ============================================================================
// FILE SLOT
// ============================================================================

/// One table entry.
///
/// Unused slots hold no name, size zero and page zero. `generation` counts
/// how many times the slot has been occupied and survives release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSlot {
    used: bool,
    name_len: u8,
    name: [u8; MAX_NAME_LEN],
    size: u32,
    page: PhysAddr,
    generation: u32,
}

impl FileSlot {
    pub const EMPTY: Self = Self {
        used: false,
        name_len: 0,
        name: [0; MAX_NAME_LEN],
        size: 0,
        page: PhysAddr::zero(),
        generation: 0,
    };

    #[inline]
    pub const fn is_used(&self) -> bool {
        self.used
    }

    #[inline]
    pub fn name(&self) -> &[u8] {
        &self.name[..self.name_len as usize]
    }

    #[inline]
    pub const fn size(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub const fn page(&self) -> PhysAddr {
        self.page
    }

    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    #[inline]
    pub(super) fn matches(&self, name: &[u8]) -> bool {
        self.used && self.name() == name
    }

    pub(super) fn occupy(&mut self, name: &FileName, page: PhysAddr, size: usize) {
        self.used = true;
        self.name_len = name.len;
        self.name = name.bytes;
        self.page = page;
        self.size = size as u32;
        self.generation = self.generation.wrapping_add(1);
    }

    pub(super) fn set_size(&mut self, size: usize) {
        self.size = size as u32;
    }

    pub(super) fn release(&mut self) {
        let generation = self.generation;
        *self = Self::EMPTY;
        self.generation = generation;
    }
}

impl Default for FileSlot {
    fn default() -> Self {
        Self::EMPTY
    }
}

// ============================================================================
// HANDLES AND SNAPSHOTS
// ============================================================================

/// Stable reference to one occupancy of a slot.
///
/// Goes stale once the file is removed, even if a new file later lands in
/// the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileHandle {
    index: usize,
    generation: u32,
}

impl FileHandle {
    pub(super) const fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

/// Where a file's content lives: `size` valid bytes starting at `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLocation {
    pub page: PhysAddr,
    pub size: usize,
}

/// Copy of one slot's metadata, used or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub index: usize,
    pub used: bool,
    pub size: usize,
    pub page: PhysAddr,
    pub generation: u32,
    name_len: u8,
    name: [u8; MAX_NAME_LEN],
}

impl SlotSnapshot {
    pub(super) fn capture(index: usize, slot: &FileSlot) -> Self {
        Self {
            index,
            used: slot.used,
            size: slot.size(),
            page: slot.page,
            generation: slot.generation,
            name_len: slot.name_len,
            name: slot.name,
        }
    }

    pub fn name(&self) -> &[u8] {
        &self.name[..self.name_len as usize]
    }

    pub fn name_str(&self) -> Option<&str> {
        core::str::from_utf8(self.name()).ok()
    }

    pub fn location(&self) -> Option<FileLocation> {
        self.used.then_some(FileLocation { page: self.page, size: self.size })
    }

    pub fn handle(&self) -> Option<FileHandle> {
        self.used.then_some(FileHandle::new(self.index, self.generation))
    }
}

/// Occupancy summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableUsage {
    pub used_slots: usize,
    pub free_slots: usize,
    pub bytes_stored: usize,
}

impl TableUsage {
    pub const fn capacity(&self) -> usize {
        self.used_slots + self.free_slots
    }

    pub const fn is_full(&self) -> bool {
        self.free_slots == 0
    }
}
