//! Pascal VOC sample provider.
//!
//! Reads the standard VOC layout:
//!
//! ```text
//! <root>/ImageSets/Main/<split>.txt   one example id per line
//! <root>/Annotations/<id>.xml         objects and boxes
//! <root>/JPEGImages/<id>.jpg          the image
//! ```
//!
//! VOC box coordinates are 1-based; they are shifted to 0-based pixel
//! coordinates and reordered to `(y_min, x_min, y_max, x_max)`.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::Node;
use tracing::debug;

use super::SampleSource;
use crate::error::PrepError;
use crate::sample::{BBox, ChwImage, ClassId, Original, Sample};

/// The 20 Pascal VOC object classes; a label is an index into this list.
pub const VOC_BBOX_LABEL_NAMES: [&str; 20] = [
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "diningtable",
    "dog",
    "horse",
    "motorbike",
    "person",
    "pottedplant",
    "sheep",
    "sofa",
    "train",
    "tvmonitor",
];

/// A Pascal VOC split opened for random access.
#[derive(Clone, Debug)]
pub struct VocSource {
    root: PathBuf,
    ids: Vec<String>,
    use_difficult: bool,
}

impl VocSource {
    /// Open `root` and read the example ids of `split` (e.g. `trainval`).
    ///
    /// Objects flagged `difficult` are dropped from every sample unless
    /// `use_difficult` is set.
    pub fn open(root: &Path, split: &str, use_difficult: bool) -> Result<Self, PrepError> {
        let list_path = root
            .join("ImageSets")
            .join("Main")
            .join(format!("{split}.txt"));
        if !list_path.is_file() {
            return Err(PrepError::VocLayoutInvalid {
                path: root.to_path_buf(),
                message: format!("missing split list ImageSets/Main/{split}.txt"),
            });
        }

        let raw = fs::read_to_string(&list_path)?;
        let ids: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        debug!(root = %root.display(), split, examples = ids.len(), "opened VOC split");

        Ok(Self {
            root: root.to_path_buf(),
            ids,
            use_difficult,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Example ids in split-file order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl SampleSource for VocSource {
    fn len(&self) -> usize {
        self.ids.len()
    }

    fn get_example(&self, index: usize) -> Result<Sample, PrepError> {
        let id = self.ids.get(index).ok_or(PrepError::IndexOutOfRange {
            index,
            len: self.ids.len(),
        })?;

        let xml_path = self.root.join("Annotations").join(format!("{id}.xml"));
        let annotation = parse_voc_annotation(&xml_path)?;

        let mut boxes = Vec::with_capacity(annotation.objects.len());
        let mut labels = Vec::with_capacity(annotation.objects.len());
        let mut difficult = Vec::with_capacity(annotation.objects.len());
        for object in annotation.objects {
            if object.difficult && !self.use_difficult {
                continue;
            }
            boxes.push(object.bbox);
            labels.push(object.label);
            difficult.push(object.difficult);
        }

        let image_path = self.root.join("JPEGImages").join(format!("{id}.jpg"));
        let image = load_chw_image(&image_path)?;

        debug!(id = %id, objects = boxes.len(), "loaded VOC example");

        Ok(Sample {
            image,
            boxes,
            labels,
            difficult,
        })
    }

    fn class_name(&self, label: u32) -> Option<&str> {
        VOC_BBOX_LABEL_NAMES.get(label as usize).copied()
    }
}

/// Objects parsed from one VOC annotation file.
#[derive(Clone, Debug, PartialEq)]
pub struct VocAnnotation {
    pub objects: Vec<VocObject>,
}

/// One `<object>` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct VocObject {
    pub name: String,
    pub label: ClassId,
    pub bbox: BBox<Original>,
    pub difficult: bool,
}

/// Parse a VOC annotation file.
pub fn parse_voc_annotation(path: &Path) -> Result<VocAnnotation, PrepError> {
    let xml = fs::read_to_string(path).map_err(PrepError::Io)?;
    parse_voc_annotation_at(&xml, path)
}

/// Parse VOC annotation XML from a UTF-8 string.
///
/// This helper is primarily useful for testing/fuzzing parse behavior in-memory.
pub fn parse_voc_annotation_str(xml: &str) -> Result<VocAnnotation, PrepError> {
    parse_voc_annotation_at(xml, Path::new("<memory>"))
}

/// Parse VOC annotation XML from bytes.
///
/// The input must be valid UTF-8.
pub fn parse_voc_annotation_slice(bytes: &[u8]) -> Result<VocAnnotation, PrepError> {
    let xml = std::str::from_utf8(bytes).map_err(|source| PrepError::VocXmlParse {
        path: PathBuf::from("<memory>"),
        message: format!("input is not valid UTF-8: {source}"),
    })?;
    parse_voc_annotation_str(xml)
}

/// Decode an image file into a CHW float image in `[0, 255]`.
pub fn load_chw_image(path: &Path) -> Result<ChwImage, PrepError> {
    let decoded = image::open(path).map_err(|source| PrepError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    ChwImage::from_rgb8(&decoded.to_rgb8())
}

fn parse_voc_annotation_at(xml: &str, path: &Path) -> Result<VocAnnotation, PrepError> {
    let document = roxmltree::Document::parse(xml).map_err(|source| PrepError::VocXmlParse {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;

    let annotation = document.root_element();
    if annotation.tag_name().name() != "annotation" {
        return Err(PrepError::VocXmlParse {
            path: path.to_path_buf(),
            message: "missing <annotation> root element".to_string(),
        });
    }

    let mut objects = Vec::new();
    for object in annotation
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "object")
    {
        let name = required_child_text(object, "name", path, "<object>")?.to_lowercase();
        let label = VOC_BBOX_LABEL_NAMES
            .iter()
            .position(|known| *known == name)
            .map(|idx| ClassId::new(idx as u32))
            .ok_or_else(|| PrepError::UnknownClass {
                path: path.to_path_buf(),
                name: name.clone(),
            })?;

        // Only an explicit 1 marks an object difficult.
        let difficult = match optional_child_text(object, "difficult") {
            None => false,
            Some(raw) => raw
                .parse::<i64>()
                .map(|flag| flag == 1)
                .map_err(|_| PrepError::VocXmlParse {
                    path: path.to_path_buf(),
                    message: format!("invalid <difficult> value '{raw}' in <object>"),
                })?,
        };

        let bndbox = required_child_element(object, "bndbox", path, "<object>")?;
        let ymin = parse_required_f64(bndbox, "ymin", path, "<bndbox>")? - 1.0;
        let xmin = parse_required_f64(bndbox, "xmin", path, "<bndbox>")? - 1.0;
        let ymax = parse_required_f64(bndbox, "ymax", path, "<bndbox>")? - 1.0;
        let xmax = parse_required_f64(bndbox, "xmax", path, "<bndbox>")? - 1.0;

        objects.push(VocObject {
            name,
            label,
            bbox: BBox::from_yxyx(ymin, xmin, ymax, xmax),
            difficult,
        });
    }

    Ok(VocAnnotation { objects })
}

fn required_child_element<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<Node<'a, 'input>, PrepError> {
    child_element(node, tag).ok_or_else(|| PrepError::VocXmlParse {
        path: path.to_path_buf(),
        message: format!("missing <{tag}> in {context}"),
    })
}

fn required_child_text(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<String, PrepError> {
    optional_child_text(node, tag).ok_or_else(|| PrepError::VocXmlParse {
        path: path.to_path_buf(),
        message: format!("missing <{tag}> in {context}"),
    })
}

fn parse_required_f64(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<f64, PrepError> {
    let raw = required_child_text(node, tag, path, context)?;
    raw.parse::<f64>().map_err(|_| PrepError::VocXmlParse {
        path: path.to_path_buf(),
        message: format!(
            "invalid <{tag}> value '{raw}' in {context}; expected floating-point number"
        ),
    })
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

fn optional_child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    child_element(node, tag)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_XML: &str = r#"<annotation>
  <filename>000005.jpg</filename>
  <size><width>500</width><height>375</height><depth>3</depth></size>
  <object>
    <name>Chair</name>
    <difficult>0</difficult>
    <bndbox><xmin>263</xmin><ymin>211</ymin><xmax>324</xmax><ymax>339</ymax></bndbox>
  </object>
  <object>
    <name>person</name>
    <difficult>1</difficult>
    <bndbox><xmin>1</xmin><ymin>1</ymin><xmax>50</xmax><ymax>60</ymax></bndbox>
  </object>
</annotation>"#;

    #[test]
    fn parses_objects_as_zero_based_yxyx() {
        let parsed = parse_voc_annotation_str(SAMPLE_XML).expect("parse");
        assert_eq!(parsed.objects.len(), 2);

        let chair = &parsed.objects[0];
        assert_eq!(chair.name, "chair");
        assert_eq!(chair.label, ClassId::new(8));
        assert_eq!(chair.bbox.to_yxyx(), [210.0, 262.0, 338.0, 323.0]);
        assert!(!chair.difficult);

        let person = &parsed.objects[1];
        assert_eq!(person.label, ClassId::new(14));
        assert_eq!(person.bbox.to_yxyx(), [0.0, 0.0, 59.0, 49.0]);
        assert!(person.difficult);
    }

    #[test]
    fn missing_difficult_defaults_to_false() {
        let xml = r#"<annotation><object><name>dog</name>
            <bndbox><xmin>2</xmin><ymin>3</ymin><xmax>4</xmax><ymax>5</ymax></bndbox>
            </object></annotation>"#;
        let parsed = parse_voc_annotation_str(xml).expect("parse");
        assert!(!parsed.objects[0].difficult);
        assert_eq!(parsed.objects[0].label, ClassId::new(11));
    }

    #[test]
    fn difficult_is_set_only_by_one() {
        let object = |flag: &str| {
            format!(
                "<object><name>dog</name><difficult>{flag}</difficult>\
                 <bndbox><xmin>2</xmin><ymin>3</ymin><xmax>4</xmax><ymax>5</ymax></bndbox>\
                 </object>"
            )
        };
        let xml = format!(
            "<annotation>{}{}{}</annotation>",
            object("2"),
            object("-1"),
            object(" 1 ")
        );
        let parsed = parse_voc_annotation_str(&xml).expect("parse");
        let flags: Vec<bool> = parsed.objects.iter().map(|o| o.difficult).collect();
        assert_eq!(flags, vec![false, false, true]);

        let err = parse_voc_annotation_str(&format!("<annotation>{}</annotation>", object("yes")))
            .unwrap_err();
        assert!(err.to_string().contains("invalid <difficult> value 'yes'"));
    }

    #[test]
    fn rejects_unknown_class() {
        let xml = r#"<annotation><object><name>unicorn</name>
            <bndbox><xmin>2</xmin><ymin>3</ymin><xmax>4</xmax><ymax>5</ymax></bndbox>
            </object></annotation>"#;
        let err = parse_voc_annotation_str(xml).unwrap_err();
        assert!(matches!(err, PrepError::UnknownClass { ref name, .. } if name == "unicorn"));
    }

    #[test]
    fn rejects_missing_bndbox_field() {
        let xml = r#"<annotation><object><name>dog</name>
            <bndbox><xmin>2</xmin><ymin>3</ymin><xmax>4</xmax></bndbox>
            </object></annotation>"#;
        let err = parse_voc_annotation_str(xml).unwrap_err();
        assert!(err.to_string().contains("missing <ymax>"));
    }

    #[test]
    fn rejects_wrong_root_and_bad_utf8() {
        assert!(parse_voc_annotation_str("<dataset/>").is_err());
        assert!(parse_voc_annotation_slice(&[0xff, 0xfe, 0x00]).is_err());
    }

    #[test]
    fn class_names_follow_vocabulary() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let main = dir.path().join("ImageSets").join("Main");
        fs::create_dir_all(&main).expect("create dirs");
        fs::write(main.join("val.txt"), "000005\n\n000007\n").expect("write split");

        let source = VocSource::open(dir.path(), "val", false).expect("open");
        assert_eq!(source.ids(), ["000005", "000007"]);
        assert_eq!(source.class_name(0), Some("aeroplane"));
        assert_eq!(source.class_name(19), Some("tvmonitor"));
        assert_eq!(source.class_name(20), None);
    }

    #[test]
    fn open_reports_missing_split() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = VocSource::open(dir.path(), "train", false).unwrap_err();
        assert!(matches!(err, PrepError::VocLayoutInvalid { .. }));
    }
}
