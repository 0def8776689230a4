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

use crate::memory::frame_alloc::FRAME_SIZE_USIZE;

pub const MAX_FILES: usize = 32;
pub const MAX_NAME_LEN: usize = 16;
/// Content bytes per file; one page.
pub const PAGE_SIZE: usize = FRAME_SIZE_USIZE;
pub const MAX_TOTAL_CONTENT: usize = MAX_FILES * PAGE_SIZE;
