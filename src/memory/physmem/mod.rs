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

//! Raw physical memory access.
//!
//! Every byte the file table moves in or out of a physical page goes
//! through `PhysMemory`. `DirectMap` is the only implementation that
//! dereferences addresses.

mod access;
#[cfg(test)]
mod tests;

pub use access::{clip_to_page, DirectMap, PhysMemory};
