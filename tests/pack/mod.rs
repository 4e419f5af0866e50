use super::{assert_region, gradient, solid, sprite};
use packer::{pack, Error, OverflowPolicy, Packer, Rect};

#[test]
fn two_small_sprites() {
    let sprites = [
        sprite("a.png", solid(2, 2, [255, 0, 0, 255])),
        sprite("b.png", solid(2, 2, [0, 0, 255, 255])),
    ];
    let atlas = pack(&sprites, 1024, 32, 1).unwrap();

    assert_eq!(atlas.image.dimensions(), (1024, 32));
    assert_eq!(atlas.spritesheet.frames.len(), 2);
    assert_eq!(atlas.spritesheet.frame("a.png"), Some(&Rect::new(1, 1, 2, 2)));
    assert_eq!(atlas.spritesheet.frame("b.png"), Some(&Rect::new(5, 1, 2, 2)));
    assert_eq!(atlas.used, Rect::new(0, 0, 8, 4));
}

#[test]
fn frames_follow_cumulative_extruded_widths() {
    let padding = 2;
    let widths = [3, 1, 5, 2];
    let sprites: Vec<_> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| sprite(&format!("s{i}.png"), gradient(w, 4)))
        .collect();
    let atlas = Packer::new(1024, 32, padding).pack(&sprites).unwrap();

    let mut expected_x = 0;
    for (sprite, &w) in sprites.iter().zip(&widths) {
        let frame = atlas.spritesheet.frame(&sprite.name).unwrap();
        assert_eq!(*frame, Rect::new(expected_x + padding, padding, w, 4));
        expected_x += w + 2 * padding;
    }
}

#[test]
fn canvas_holds_sprites_at_their_frames() {
    let padding = 1;
    let sprites = [
        sprite("wide.png", gradient(5, 3)),
        sprite("tall.png", gradient(2, 6)),
        sprite("dot.png", solid(1, 1, [9, 8, 7, 6])),
    ];
    let atlas = Packer::new(64, 16, padding).pack(&sprites).unwrap();

    for sprite in &sprites {
        let frame = atlas.spritesheet.frame(&sprite.name).unwrap();
        assert_eq!((frame.w, frame.h), sprite.image.dimensions());
        assert_region(&atlas.image, frame.x, frame.y, &sprite.image);
        // The padding column to the left repeats the sprite's left edge.
        assert_eq!(
            atlas.image.get_pixel(frame.x - 1, frame.y),
            sprite.image.get_pixel(0, 0)
        );
        assert_eq!(
            atlas.image.get_pixel(frame.x - 1, frame.y - 1),
            sprite.image.get_pixel(0, 0)
        );
    }
}

#[test]
fn zero_padding_packs_sprites_edge_to_edge() {
    let sprites = [
        sprite("a", gradient(3, 3)),
        sprite("b", gradient(4, 2)),
    ];
    let atlas = pack(&sprites, 16, 16, 0).unwrap();

    assert_eq!(atlas.spritesheet.frame("a"), Some(&Rect::new(0, 0, 3, 3)));
    assert_eq!(atlas.spritesheet.frame("b"), Some(&Rect::new(3, 0, 4, 2)));
    assert_region(&atlas.image, 3, 0, &sprites[1].image);
}

#[test]
fn nothing_to_pack() {
    let atlas = pack(&[], 1024, 32, 1).unwrap();

    assert!(atlas.spritesheet.frames.is_empty());
    assert_eq!(atlas.image.dimensions(), (1024, 32));
    assert!(atlas.image.pixels().all(|pixel| pixel.0 == [0, 0, 0, 0]));
    assert_eq!(atlas.used, Rect::default());
}

#[test]
fn duplicate_names_are_rejected() {
    let sprites = [
        sprite("same.png", solid(2, 2, [1, 1, 1, 255])),
        sprite("same.png", solid(2, 2, [2, 2, 2, 255])),
    ];
    match pack(&sprites, 1024, 32, 1) {
        Err(Error::DuplicateSprite(name)) => assert_eq!(name, "same.png"),
        other => panic!("expected DuplicateSprite, got {other:?}"),
    }
}

#[test]
fn empty_sprites_are_rejected() {
    let sprites = [sprite("nothing.png", image::RgbaImage::new(0, 4))];
    assert!(matches!(
        pack(&sprites, 1024, 32, 1),
        Err(Error::EmptySprite(name)) if name == "nothing.png"
    ));
}

#[test]
fn overflow_is_clipped_by_default() {
    let sprites = [
        sprite("one", solid(8, 8, [255, 0, 0, 255])),
        sprite("two", solid(8, 8, [0, 255, 0, 255])),
        sprite("three", solid(8, 8, [0, 0, 255, 255])),
    ];
    let atlas = pack(&sprites, 24, 32, 1).unwrap();

    assert_eq!(atlas.image.dimensions(), (24, 32));
    assert_eq!(atlas.spritesheet.frames.len(), 3);
    // Third block starts at x = 20 and only its first four columns land.
    assert_eq!(atlas.spritesheet.frame("three"), Some(&Rect::new(21, 1, 8, 8)));
    assert_eq!(atlas.image.get_pixel(23, 1).0, [0, 0, 255, 255]);
    assert_eq!(atlas.used, Rect::new(0, 0, 30, 10));
}

#[test]
fn overflow_can_abort() {
    let packer = Packer::new(24, 32, 1).with_overflow(OverflowPolicy::Error);
    let sprites = [
        sprite("one", solid(8, 8, [255, 0, 0, 255])),
        sprite("two", solid(8, 8, [0, 255, 0, 255])),
        sprite("three", solid(8, 8, [0, 0, 255, 255])),
    ];
    match packer.pack(&sprites) {
        Err(Error::CanvasOverflow {
            name,
            needed_width,
            needed_height,
            width,
            height,
        }) => {
            assert_eq!(name, "three");
            assert_eq!((needed_width, needed_height), (30, 10));
            assert_eq!((width, height), (24, 32));
        }
        other => panic!("expected CanvasOverflow, got {other:?}"),
    }

    let tall = [sprite("tall", solid(2, 40, [1, 2, 3, 4]))];
    assert!(matches!(
        packer.pack(&tall),
        Err(Error::CanvasOverflow { name, .. }) if name == "tall"
    ));
}

#[test]
fn input_sprites_are_untouched() {
    let sprites = vec![sprite("a", gradient(3, 3)), sprite("b", gradient(2, 5))];
    let before = sprites.clone();
    pack(&sprites, 64, 32, 2).unwrap();
    for (after, before) in sprites.iter().zip(&before) {
        assert_eq!(after.name, before.name);
        assert_eq!(after.image, before.image);
    }
}

#[test]
fn unallocatable_canvas_is_an_error() {
    assert!(matches!(
        pack(&[], u32::MAX, u32::MAX, 1),
        Err(Error::DimensionsOverflow)
    ));
}
