//! Integration tests for the NØNOS page-backed file table
//!
//! Pages come from a `RegionFrameAllocator` managing a page-aligned heap
//! arena, accessed through an identity `DirectMap`, so content really lives
//! at the physical address the table reports.

use std::alloc::{alloc_zeroed, Layout};
use std::sync::Arc;
use std::thread;

use nonos_pagefs::{
    DirectMap, FileTable, FrameSource, FsError, LockedFrameAllocator, RegionFrameAllocator,
    SharedFileTable, MAX_FILES, PAGE_SIZE,
};
use x86_64::PhysAddr;

/// Leaks a zeroed, page-aligned arena of `pages` pages and returns its bounds.
fn arena(pages: usize) -> (PhysAddr, PhysAddr) {
    let layout = Layout::from_size_align(pages * PAGE_SIZE, PAGE_SIZE).unwrap();
    let base = unsafe { alloc_zeroed(layout) } as u64;
    assert_ne!(base, 0, "arena allocation failed");
    (PhysAddr::new(base), PhysAddr::new(base + (pages * PAGE_SIZE) as u64))
}

fn region_table(pages: usize) -> FileTable<RegionFrameAllocator, DirectMap> {
    let (start, end) = arena(pages);
    let mut frames = RegionFrameAllocator::new();
    frames.init(start, end).unwrap();
    let mut table = FileTable::new(frames, unsafe { DirectMap::identity() });
    table.init();
    table
}

fn page_bytes(page: PhysAddr, size: usize) -> &'static [u8] {
    unsafe { std::slice::from_raw_parts(page.as_u64() as *const u8, size) }
}

#[test]
fn test_content_lives_at_reported_page() {
    let mut table = region_table(4);
    table.write(b"a", b"hello").unwrap();
    let location = table.lookup(b"a").unwrap();
    assert_eq!(location.size, 5);
    assert_eq!(page_bytes(location.page, location.size), b"hello");
    assert!(table.frames().is_allocated(location.page));

    table.write(b"a", b"hi").unwrap();
    let rewritten = table.lookup(b"a").unwrap();
    assert_eq!(rewritten.page, location.page);
    assert_eq!(page_bytes(rewritten.page, rewritten.size), b"hi");

    table.remove(b"a").unwrap();
    assert_eq!(table.lookup(b"a"), Err(FsError::NotFound));
    assert!(!table.frames().is_allocated(location.page));
    assert_eq!(table.frames().used_frames(), 0);
}

#[test]
fn test_oversized_write_fills_exactly_one_page() {
    let mut table = region_table(2);
    let pattern: Vec<u8> = (0..5000u32).map(|i| (i * 7 % 256) as u8).collect();
    table.write(b"blob", &pattern).unwrap();
    let location = table.lookup(b"blob").unwrap();
    assert_eq!(location.size, PAGE_SIZE);
    assert_eq!(page_bytes(location.page, PAGE_SIZE), &pattern[..PAGE_SIZE]);

    // the neighbouring frame was not touched
    let next = PhysAddr::new(location.page.as_u64() + PAGE_SIZE as u64);
    if table.frames().managed_range().unwrap().1 > next {
        assert!(page_bytes(next, PAGE_SIZE).iter().all(|&b| b == 0));
    }
}

#[test]
fn test_fill_table_then_allocator_limits() {
    let mut table = region_table(MAX_FILES + 1);
    for i in 0..MAX_FILES {
        let name = format!("f{}", i);
        table.write(name.as_bytes(), name.as_bytes()).unwrap();
    }
    let before = *table.slots();
    assert_eq!(table.write(b"overflow", b"x"), Err(FsError::TableFull));
    assert_eq!(*table.slots(), before);
    assert_eq!(table.frames().used_frames(), MAX_FILES);

    for i in 0..MAX_FILES {
        let name = format!("f{}", i);
        let location = table.lookup(name.as_bytes()).unwrap();
        assert_eq!(page_bytes(location.page, location.size), name.as_bytes());
    }
}

#[test]
fn test_allocation_failure_when_region_exhausted() {
    let mut table = region_table(2);
    table.write(b"one", b"1").unwrap();
    table.write(b"two", b"2").unwrap();
    let before = *table.slots();
    assert_eq!(table.write(b"three", b"3"), Err(FsError::AllocationFailed));
    assert_eq!(*table.slots(), before);

    table.remove(b"one").unwrap();
    table.write(b"three", b"3").unwrap();
    assert_eq!(table.entry(0).unwrap().name(), b"three");
}

#[test]
fn test_uninitialized_allocator_is_unavailable() {
    let mut table = FileTable::new(RegionFrameAllocator::new(), unsafe { DirectMap::identity() });
    table.init();
    assert!(!table.frames().is_ready());
    let before = *table.slots();
    assert_eq!(table.write(b"a", b"x"), Err(FsError::AllocatorUnavailable));
    assert_eq!(*table.slots(), before);
}

#[test]
fn test_borrowed_allocator() {
    let (start, end) = arena(2);
    let mut frames = RegionFrameAllocator::new();
    frames.init(start, end).unwrap();
    {
        let mut table = FileTable::new(&mut frames, unsafe { DirectMap::identity() });
        table.write(b"x", b"borrowed").unwrap();
        let mut buf = [0u8; 16];
        assert_eq!(table.read(b"x", &mut buf), Ok(8));
        assert_eq!(&buf[..8], b"borrowed");
    }
    assert_eq!(frames.used_frames(), 1);
}

#[test]
fn test_shared_table_across_threads() {
    let (start, end) = arena(MAX_FILES);
    let frames: &'static LockedFrameAllocator = Box::leak(Box::new(LockedFrameAllocator::new()));
    frames.init(start, end).unwrap();
    let table = Arc::new(SharedFileTable::new(frames, unsafe { DirectMap::identity() }));
    table.init();

    let workers: Vec<_> = (0..4)
        .map(|t| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for i in 0..8 {
                    let name = format!("t{}-{}", t, i);
                    table.write(name.as_bytes(), name.as_bytes()).unwrap();
                    table.write(name.as_bytes(), b"final").unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let usage = table.usage();
    assert_eq!(usage.used_slots, MAX_FILES);
    assert_eq!(usage.bytes_stored, MAX_FILES * 5);
    assert_eq!(frames.stats().frames_used, MAX_FILES);
    assert_eq!(table.write(b"late", b"x"), Err(FsError::TableFull));

    let mut buf = [0u8; 8];
    assert_eq!(table.read(b"t2-7", &mut buf), Ok(5));
    assert_eq!(&buf[..5], b"final");
}
