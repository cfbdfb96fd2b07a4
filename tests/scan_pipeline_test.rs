//! End-to-end scan pipeline tests over the mock provider

use gworld_scan::config::TargetConfig;
use gworld_scan::core::types::{Address, PAGE_SIZE};
use gworld_scan::process::{find_target, resolve_module, TargetProcess};
use gworld_scan::provider::MockProvider;
use gworld_scan::report::{rank, render_report};
use gworld_scan::scanner::{RegionScanner, ScanOptions, ScanWindow, WorldOffsets};
use pretty_assertions::assert_eq;

const PID: u32 = 1960;
const PROCESS_NAME: &str = "PioneerGame.exe";
const MODULE_BASE: u64 = 0x7FF6_0000_0000;
const ANCHOR_OFFSET: u64 = 0x7E97580;

const WORLD: u64 = 0x2_1000_0000;
const LEVEL: u64 = 0x2_2000_0000;
const ACTORS: u64 = 0x2_3000_0000;
const INSTANCE: u64 = 0x2_4000_0000;
const LEVELS_ARR: u64 = 0x2_5000_0000;
const GAME_STATE: u64 = 0x2_6000_0000;

/// Provider with the target process/module registered and a fully
/// populated world structure placed outside the scan window.
fn provider_with_world(offsets: &WorldOffsets) -> MockProvider {
    let mut provider = MockProvider::new();
    provider.add_process(4, "System");
    provider.add_process(PID, PROCESS_NAME);
    provider.add_module(PID, PROCESS_NAME, MODULE_BASE);

    provider.write_memory(WORLD, &vec![0u8; 0x200]);
    provider.write_u64(WORLD + offsets.persistent_level, LEVEL);
    provider.write_u64(WORLD + offsets.owning_game_instance, INSTANCE);
    provider.write_u64(WORLD + offsets.levels, LEVELS_ARR);
    provider.write_u64(WORLD + offsets.game_state, GAME_STATE);

    provider.write_memory(LEVEL, &vec![0u8; 0x100]);
    provider.write_u64(LEVEL + offsets.level_actors, ACTORS);
    provider.write_u32(LEVEL + offsets.level_actor_count, 3);

    let mut slots = Vec::new();
    for i in 0..3u64 {
        let actor = 0x2_7000_0000 + i * 0x10000;
        slots.extend_from_slice(&actor.to_le_bytes());
        provider.write_u64(actor, 0x1);
    }
    provider.write_memory(ACTORS, &slots);

    provider.write_u64(INSTANCE, 0x1);
    provider.write_u64(GAME_STATE, 0x1);
    provider.write_u64(LEVELS_ARR, LEVEL);

    provider
}

fn window_around_anchor(radius: u64) -> ScanWindow {
    ScanWindow::around(Address::new(MODULE_BASE + ANCHOR_OFFSET), radius)
}

#[test]
fn full_scan_finds_the_planted_world_pointer() {
    let offsets = WorldOffsets::default();
    let mut provider = provider_with_world(&offsets);

    // Fill the window with zeros and plant the world pointer at a known
    // aligned slot near the anchor.
    let window = window_around_anchor(0x20000);
    let size = window.size() as usize;
    let mut region = vec![0u8; size];
    let slot_address = window.start.as_u64() + 0x1_2340;
    let slot_index = (slot_address - window.start.as_u64()) as usize;
    region[slot_index..slot_index + 8].copy_from_slice(&WORLD.to_le_bytes());
    provider.write_memory(window.start.as_u64(), &region);

    // Resolve the target the way the binary does
    let config = TargetConfig::default();
    let (pid, name) = find_target(&provider, &config).unwrap();
    assert_eq!(pid, PID);
    let module_base = resolve_module(&provider, pid, &config.module_name).unwrap();
    assert_eq!(module_base, Address::new(MODULE_BASE));

    let target = TargetProcess::new(&provider, pid, name, module_base);
    let options = ScanOptions {
        chunk_size: 0x10000,
        min_confidence: 50,
    };
    let mut scanner = RegionScanner::new(&target, offsets, options);
    let candidates = scanner.scan(&window);

    assert_eq!(candidates.len(), 1);
    let found = &candidates[0];
    assert_eq!(found.address, Address::new(slot_address));
    assert_eq!(found.offset, slot_address - MODULE_BASE);
    assert_eq!(found.value, WORLD);
    assert!(found.score >= 50);
    assert_eq!(found.actor_count, 3);

    // And the report surfaces the winning offset
    let ranked = rank(candidates);
    let report = render_report(&ranked);
    assert!(report.contains(&format!("GWORLD_OFFSET = 0x{:X}", slot_address - MODULE_BASE)));
}

#[test]
fn zero_filled_window_yields_no_candidates() {
    let mut provider = MockProvider::new();
    let window = window_around_anchor(0x10000);
    provider.write_memory(window.start.as_u64(), &vec![0u8; window.size() as usize]);

    let target = TargetProcess::new(
        &provider,
        PID,
        PROCESS_NAME.to_string(),
        Address::new(MODULE_BASE),
    );
    let options = ScanOptions {
        chunk_size: 0x10000,
        min_confidence: 50,
    };
    let mut scanner = RegionScanner::new(&target, WorldOffsets::default(), options);
    let candidates = scanner.scan(&window);

    assert!(candidates.is_empty());
    let ranked = rank(candidates);
    assert!(ranked.is_empty());
    assert!(render_report(&ranked).contains("No GWorld candidates found"));
}

#[test]
fn window_with_unmapped_chunks_still_finds_the_candidate() {
    let offsets = WorldOffsets::default();
    let mut provider = provider_with_world(&offsets);

    // Map only the middle chunk of a three-chunk window; the outer chunks
    // fail their bulk reads and are skipped.
    let window = window_around_anchor(0x18000);
    let chunk = 0x10000usize;
    let middle = window.start.as_u64() + chunk as u64;
    let mut region = vec![0u8; chunk];
    region[0x4000..0x4008].copy_from_slice(&WORLD.to_le_bytes());
    provider.write_memory(middle, &region);

    let target = TargetProcess::new(
        &provider,
        PID,
        PROCESS_NAME.to_string(),
        Address::new(MODULE_BASE),
    );
    let options = ScanOptions {
        chunk_size: chunk,
        min_confidence: 50,
    };
    let mut scanner = RegionScanner::new(&target, offsets, options);
    let candidates = scanner.scan(&window);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].address, Address::new(middle + 0x4000));
}

#[test]
fn noise_pointers_do_not_clear_the_confidence_bar() {
    let offsets = WorldOffsets::default();
    let mut provider = provider_with_world(&offsets);

    // Plausible-looking values that dereference into plain zeroed memory:
    // they earn the +10 probe point at most and never reach 50.
    let noise_target = 0x2_8000_0000u64;
    provider.write_memory(noise_target, &vec![0u8; 0x1000]);

    let window = window_around_anchor(0x8000);
    let size = window.size() as usize;
    let mut region = vec![0u8; size];
    for slot in (0..size).step_by(64) {
        region[slot..slot + 8].copy_from_slice(&noise_target.to_le_bytes());
    }
    provider.write_memory(window.start.as_u64(), &region);

    let target = TargetProcess::new(
        &provider,
        PID,
        PROCESS_NAME.to_string(),
        Address::new(MODULE_BASE),
    );
    let options = ScanOptions {
        chunk_size: 0x10000,
        min_confidence: 50,
    };
    let mut scanner = RegionScanner::new(&target, offsets, options);

    assert!(scanner.scan(&window).is_empty());
}

#[test]
fn scan_window_is_page_aligned_for_any_anchor() {
    for anchor in [0x1234_5677u64, 0xFFF, 0x7FF6_07E9_7581, 0x1000] {
        let window = ScanWindow::around(Address::new(anchor), 0x12345);
        assert_eq!(window.start.as_u64() % PAGE_SIZE, 0);
        assert_eq!(window.end.as_u64() % PAGE_SIZE, 0);
    }
}
