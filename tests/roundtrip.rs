//! Round-trip law over a small corpus of hand-built `.cast` fixtures: for
//! every file here, `save(load(bytes)) == bytes`. Exercises the decode/encode
//! path against bytes that were never in-process-constructed by this crate
//! itself, unlike the synthetic round-trips in `src/codec.rs`/`src/document.rs`.

use std::fs;
use std::path::Path;

#[ctor::ctor]
fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const FIXTURES: &[&str] = &["empty.cast", "single_bone.cast", "skeleton_chain.cast"];

#[test]
fn fixture_corpus_round_trips_byte_identically() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");

    for name in FIXTURES {
        let path = dir.join(name);
        let original =
            fs::read(&path).unwrap_or_else(|e| panic!("reading fixture {name}: {e}"));

        let document = cast::load_bytes(&original)
            .unwrap_or_else(|e| panic!("decoding fixture {name}: {e}"));
        let reencoded = cast::save_bytes(document)
            .unwrap_or_else(|e| panic!("encoding fixture {name}: {e}"));

        assert_eq!(
            reencoded, original,
            "fixture {name} did not round-trip byte-identically"
        );
    }
}

#[test]
fn single_bone_fixture_is_readable_through_the_bone_facade() {
    use cast::face::Bone;

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/single_bone.cast");
    let document = cast::load(&path).unwrap();

    let root = document.roots().first().expect("one root node");
    let bone: Bone = root.clone().into();
    assert_eq!(bone.name(), "root");
    assert!(bone.is_root());
}

#[test]
fn skeleton_chain_fixture_preserves_bone_order_and_positions() {
    use cast::face::Skeleton;
    use glam::Vec3;

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/skeleton_chain.cast");
    let document = cast::load(&path).unwrap();

    let root = document.roots().first().expect("one root node");
    let skeleton: Skeleton = root.clone().into();
    let bones = skeleton.bones();

    assert_eq!(bones.len(), 3);
    assert_eq!(bones[0].name(), "root");
    assert_eq!(bones[1].name(), "mid");
    assert_eq!(bones[2].name(), "tip");
    assert_eq!(bones[1].parent_index(), 0);
    assert_eq!(bones[2].parent_index(), 1);
    assert_eq!(bones[1].local_position(), Vec3::new(0.0, 0.0, 1.0));
}
