use std::collections::BTreeMap;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AtlasMapper {
    frames: BTreeMap<String, MapperFrame>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
struct MapperFrame {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

fn main() {
    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("atlas_data.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    let atlas_json = include_str!("./assets/atlas.json");
    let atlas_mapper: AtlasMapper = serde_json::from_str(atlas_json).unwrap();

    writeln!(&mut file, "use phf::phf_map;").unwrap();

    writeln!(
        &mut file,
        "pub static ATLAS_FRAMES: phf::Map<&'static str, ClipFrame> = phf_map! {{"
    )
    .unwrap();

    for (name, frame) in atlas_mapper.frames {
        writeln!(
            &mut file,
            "    \"{}\" => ClipFrame {{ x: {}, y: {}, width: {}, height: {} }},",
            name, frame.x, frame.y, frame.width, frame.height
        )
        .unwrap();
    }

    writeln!(&mut file, "}};").unwrap();
    println!("cargo:rerun-if-changed=assets/atlas.json");
}
