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
use super::error::FrameResult;

/// Supplier of single 4 KiB physical pages.
///
/// `allocate_page` returns a distinct, page-aligned, nonzero address per
/// call until that address is handed back through `free_page`.
pub trait FrameSource {
    /// Whether the allocator has been brought up and can serve requests.
    fn is_ready(&self) -> bool;

    fn allocate_page(&mut self) -> Option<PhysAddr>;

    fn free_page(&mut self, page: PhysAddr) -> FrameResult<()>;
}

impl<T: FrameSource + ?Sized> FrameSource for &mut T {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn allocate_page(&mut self) -> Option<PhysAddr> {
        (**self).allocate_page()
    }

    fn free_page(&mut self, page: PhysAddr) -> FrameResult<()> {
        (**self).free_page(page)
    }
}
