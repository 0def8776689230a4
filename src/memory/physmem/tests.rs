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

use super::*;
use x86_64::PhysAddr;

#[repr(C, align(4096))]
struct TwoPages([u8; 8192]);

fn page_addr(buf: &mut TwoPages, index: usize) -> PhysAddr {
    PhysAddr::new(buf.0.as_mut_ptr() as u64 + (index as u64) * 4096)
}

// ============================================================================
// CLIPPING TESTS
// ============================================================================

#[test]
fn test_clip_inside_page() {
    assert_eq!(clip_to_page(0, 0), 0);
    assert_eq!(clip_to_page(0, 5), 5);
    assert_eq!(clip_to_page(100, 200), 200);
    assert_eq!(clip_to_page(0, 4096), 4096);
}

#[test]
fn test_clip_at_page_end() {
    assert_eq!(clip_to_page(0, 5000), 4096);
    assert_eq!(clip_to_page(4000, 200), 96);
    assert_eq!(clip_to_page(4096, 1), 0);
    assert_eq!(clip_to_page(usize::MAX, 1), 0);
}

// ============================================================================
// DIRECT MAP TESTS
// ============================================================================

#[test]
fn test_identity_write_then_read() {
    let mut buf = Box::new(TwoPages([0; 8192]));
    let page = page_addr(&mut buf, 0);
    let mut mem = unsafe { DirectMap::identity() };

    assert_eq!(mem.write(page, 10, b"hello"), 5);
    let mut out = [0u8; 5];
    assert_eq!(mem.read(page, 10, &mut out), 5);
    assert_eq!(&out, b"hello");
    assert_eq!(&buf.0[10..15], b"hello");
    buf.0[10] = b'j';
    mem.read(page, 10, &mut out);
    assert_eq!(&out, b"jello");
}

#[test]
fn test_write_does_not_cross_into_next_page() {
    let mut buf = Box::new(TwoPages([0; 8192]));
    let page = page_addr(&mut buf, 0);
    let mut mem = unsafe { DirectMap::identity() };

    let data = [0xAAu8; 64];
    assert_eq!(mem.write(page, 4090, &data), 6);
    assert!(buf.0[4090..4096].iter().all(|&b| b == 0xAA));
    assert!(buf.0[4096..].iter().all(|&b| b == 0));
}

#[test]
fn test_read_clipped_to_page() {
    let mut buf = Box::new(TwoPages([7; 8192]));
    let page = page_addr(&mut buf, 1);
    let mem = unsafe { DirectMap::identity() };

    let mut out = [0u8; 5000];
    assert_eq!(mem.read(page, 0, &mut out), 4096);
    assert!(out[..4096].iter().all(|&b| b == 7));
    assert!(out[4096..].iter().all(|&b| b == 0));
}

#[test]
fn test_offset_mapping() {
    let mut buf = Box::new(TwoPages([0; 8192]));
    let virt = buf.0.as_mut_ptr() as u64;
    let fake_phys = 0x20_0000u64;
    let mut mem = unsafe { DirectMap::new(virt.wrapping_sub(fake_phys)) };
    assert_eq!(mem.offset(), virt.wrapping_sub(fake_phys));

    mem.write(PhysAddr::new(fake_phys + 4096), 0, b"second");
    assert_eq!(&buf.0[4096..4102], b"second");
}
