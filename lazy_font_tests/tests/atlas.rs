// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cache behavior, texture mirroring, capacity, and disposal.

use lazy_font::{ErrorKind, LazyFont, Rgba8};

use crate::util::{config, MockRasterizer, RecordingTexture};

#[test]
fn cache_is_idempotent() {
    let mock = MockRasterizer::new().probe_defaults().glyph('a', 4, 5);
    let calls = mock.calls();
    let mut font = LazyFont::new(mock, &config(64, 64)).unwrap();

    let first = *font.glyph('a').unwrap().unwrap();
    let second = *font.glyph('a').unwrap().unwrap();
    assert_eq!(first, second, "repeated lookups return the identical glyph");
    assert_eq!(calls.rasterize.get(), 1, "the second lookup is a pure cache hit");
    assert_eq!(font.atlas().cache_hits(), 1);
}

#[test]
fn cache_miss_for_unsupported_character() {
    let mock = MockRasterizer::new().probe_defaults().glyph('a', 4, 5);
    let calls = mock.calls();
    let mut font = LazyFont::new(mock, &config(64, 64)).unwrap();

    assert!(font.glyph('\u{2603}').unwrap().is_none());
    assert_eq!(calls.rasterize.get(), 1, "the rasterizer was consulted");
    assert_eq!(font.atlas().len(), 1, "only the space is cached");
    assert!(font.regions().is_empty(), "no atlas space was consumed");

    // The cursor did not move either: the next glyph starts at the origin.
    let glyph = font.glyph('a').unwrap().unwrap();
    let region = glyph.region.unwrap();
    assert_eq!((region.x, region.y), (0, 0));
}

#[test]
fn cache_null_sentinel_is_never_generated() {
    let mock = MockRasterizer::new().probe_defaults();
    let calls = mock.calls();
    let mut font = LazyFont::new(mock, &config(64, 64)).unwrap();

    assert!(font.glyph('\0').unwrap().is_none());
    assert_eq!(calls.rasterize.get(), 0);
}

#[test]
fn dispose_is_terminal() {
    let mock = MockRasterizer::new().probe_defaults().glyph('a', 4, 5);
    let texture = RecordingTexture::default();
    let dispose_count = texture.dispose_count.clone();
    let mut font = LazyFont::with_texture(mock, texture, &config(64, 64)).unwrap();

    font.glyph('a').unwrap().unwrap();
    font.dispose();
    assert!(font.is_disposed());
    assert_eq!(dispose_count.get(), 1);

    let err = font.glyph('a').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Disposed);
    let err = font.glyph('b').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Disposed);

    // Disposing again is a no-op, not a double release.
    font.dispose();
    assert_eq!(dispose_count.get(), 1);
}

#[test]
fn texture_receives_one_upload_per_placement() {
    let mock = MockRasterizer::new()
        .probe_defaults()
        .glyph('a', 4, 5)
        .glyph('b', 6, 3);
    let texture = RecordingTexture::default();
    let uploads = texture.uploads.clone();
    let mut font = LazyFont::with_texture(mock, texture, &config(64, 64)).unwrap();

    font.glyph('a').unwrap();
    font.glyph('b').unwrap();
    font.glyph('a').unwrap();

    assert_eq!(uploads.borrow().as_slice(), font.regions());
    assert_eq!(uploads.borrow().len(), 2);
}

#[test]
fn pixmap_holds_the_blitted_coverage() {
    let mock = MockRasterizer::new()
        .probe_defaults()
        .glyph_with_coverage('a', 2, 2, 0x80);
    let mut font = LazyFont::new(mock, &config(64, 64)).unwrap();

    let region = font.glyph('a').unwrap().unwrap().region.unwrap();
    let pixmap = font.pixmap();
    assert_eq!(pixmap.texel(region.x, region.y), Rgba8::from_coverage(0x80));
    assert_eq!(
        pixmap.texel(region.x + 1, region.y + 1),
        Rgba8::from_coverage(0x80)
    );
    assert_eq!(pixmap.texel(region.x + 2, region.y), Rgba8::TRANSPARENT);
    assert_eq!(pixmap.texel(region.x, region.y + 2), Rgba8::TRANSPARENT);
}

#[test]
fn atlas_full_is_loud_and_leaves_state_alone() {
    let mock = MockRasterizer::new()
        .probe_defaults()
        .glyph('a', 6, 6)
        .glyph('b', 6, 6)
        .glyph('c', 3, 3);
    // Tall probes would not fit here either, so place only after init.
    let mut font = LazyFont::new(mock, &config(10, 10)).unwrap();

    font.glyph('a').unwrap().unwrap();

    let err = font.glyph('b').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AtlasFull);
    let info = err.placement().unwrap();
    assert_eq!((info.width, info.height), (6, 6));
    assert_eq!((info.atlas_width, info.atlas_height), (10, 10));

    assert_eq!(font.atlas().len(), 2, "space + 'a'; 'b' was not cached");
    assert_eq!(font.regions().len(), 1);

    // The failed placement did not move the cursor.
    let region = font.glyph('c').unwrap().unwrap().region.unwrap();
    assert_eq!((region.x, region.y), (6, 0));
}

#[test]
fn atlas_rejects_a_glyph_wider_than_the_surface() {
    let mock = MockRasterizer::new().probe_defaults().glyph('a', 20, 2);
    let mut font = LazyFont::new(mock, &config(10, 100)).unwrap();
    let err = font.glyph('a').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AtlasFull);
}

#[test]
fn page_counter_records_insertion_order() {
    let mock = MockRasterizer::new()
        .probe_defaults()
        .glyph('a', 4, 5)
        .glyph('b', 6, 3);
    let mut font = LazyFont::new(mock, &config(64, 64)).unwrap();

    assert_eq!(font.glyph(' ').unwrap().unwrap().page, 0);
    assert_eq!(font.glyph('a').unwrap().unwrap().page, 1);
    assert_eq!(font.glyph('b').unwrap().unwrap().page, 2);
}

#[test]
fn precache_skips_misses_and_counts_hits() {
    let mock = MockRasterizer::new()
        .probe_defaults()
        .glyph('a', 4, 5)
        .glyph('b', 6, 3);
    let calls = mock.calls();
    let mut font = LazyFont::new(mock, &config(64, 64)).unwrap();

    font.precache("ab a?").unwrap();
    assert_eq!(font.atlas().len(), 3, "space + 'a' + 'b'; '?' is unsupported");
    assert_eq!(calls.rasterize.get(), 3, "'a', 'b', and the '?' miss");
    assert_eq!(font.atlas().cache_hits(), 2, "' ' and the repeated 'a'");
}

#[test]
fn stats_can_be_cleared_without_clearing_the_cache() {
    let mock = MockRasterizer::new().probe_defaults().glyph('a', 4, 5);
    let mut font = LazyFont::new(mock, &config(64, 64)).unwrap();

    font.glyph('a').unwrap();
    font.glyph('a').unwrap();
    assert!(font.atlas().cache_hits() > 0);

    font.clear_stats();
    assert_eq!(font.atlas().cache_hits(), 0);
    assert_eq!(font.atlas().cache_misses(), 0);
    assert_eq!(font.atlas().len(), 2, "space + 'a' survive");
}
