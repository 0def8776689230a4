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

pub const FRAME_SIZE: u64 = 4096;
pub const FRAME_SIZE_USIZE: usize = 4096;
pub const FRAME_ALIGNMENT: u64 = FRAME_SIZE;
/// Lowest frame address handed out; address zero is the failure sentinel.
pub const MIN_FRAME_ADDRESS: u64 = FRAME_SIZE;
pub const BITS_PER_WORD: usize = 64;
/// 32 MiB per managed region.
pub const MAX_REGION_FRAMES: usize = 8192;
pub const BITMAP_WORDS: usize = MAX_REGION_FRAMES / BITS_PER_WORD;

#[inline]
pub const fn is_frame_aligned(addr: u64) -> bool {
    addr % FRAME_ALIGNMENT == 0
}

#[inline]
pub const fn frames_in_range(start: u64, end: u64) -> usize {
    if end <= start {
        return 0;
    }
    ((end - start) / FRAME_SIZE) as usize
}
