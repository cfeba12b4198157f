#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

/// Write a solid-colour JPEG of the given size.
pub fn write_jpeg(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(path)
        .expect("write jpeg file");
}

/// Build a two-example VOC tree under `root`:
///
/// - `000001`: 375x500 image, one chair and one difficult person
/// - `000002`: 1200x800 image, one dog covering the whole image
pub fn create_sample_voc_dataset(root: &Path) {
    let main = root.join("ImageSets").join("Main");
    fs::create_dir_all(&main).expect("create split dir");
    fs::create_dir_all(root.join("Annotations")).expect("create annotations dir");
    fs::write(main.join("trainval.txt"), "000001\n000002\n").expect("write split");

    let xml_a = r#"<?xml version="1.0" encoding="utf-8"?>
<annotation>
  <filename>000001.jpg</filename>
  <size>
    <width>500</width>
    <height>375</height>
    <depth>3</depth>
  </size>
  <object>
    <name>chair</name>
    <difficult>0</difficult>
    <bndbox>
      <xmin>263</xmin>
      <ymin>211</ymin>
      <xmax>324</xmax>
      <ymax>339</ymax>
    </bndbox>
  </object>
  <object>
    <name>person</name>
    <difficult>1</difficult>
    <bndbox>
      <xmin>1</xmin>
      <ymin>1</ymin>
      <xmax>101</xmax>
      <ymax>201</ymax>
    </bndbox>
  </object>
</annotation>
"#;

    let xml_b = r#"<?xml version="1.0" encoding="utf-8"?>
<annotation>
  <filename>000002.jpg</filename>
  <size>
    <width>800</width>
    <height>1200</height>
    <depth>3</depth>
  </size>
  <object>
    <name>dog</name>
    <difficult>0</difficult>
    <bndbox>
      <xmin>1</xmin>
      <ymin>1</ymin>
      <xmax>801</xmax>
      <ymax>1201</ymax>
    </bndbox>
  </object>
</annotation>
"#;

    fs::write(root.join("Annotations").join("000001.xml"), xml_a).expect("write xml a");
    fs::write(root.join("Annotations").join("000002.xml"), xml_b).expect("write xml b");

    write_jpeg(
        &root.join("JPEGImages").join("000001.jpg"),
        500,
        375,
        [200, 100, 50],
    );
    write_jpeg(
        &root.join("JPEGImages").join("000002.jpg"),
        800,
        1200,
        [10, 20, 30],
    );
}
