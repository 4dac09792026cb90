use pcbtrace::lowlevel::TEMPLATE_BYTES;
use pcbtrace::{PcbError, Template, TemplateLibrary};

fn sample_templates() -> Vec<Template> {
    vec![
        Template::from_fn(|row, col| row == 0 || col == 0),
        Template::from_fn(|row, col| (row / 4 + col / 4) % 2 == 0),
        Template::from_fn(|_, _| false),
    ]
}

#[test]
fn every_declared_index_is_addressable() {
    let lib = TemplateLibrary::from_templates(sample_templates()).unwrap();
    let bytes = lib.to_bytes();
    assert_eq!(bytes.len(), 1 + 3 * TEMPLATE_BYTES);
    assert_eq!(bytes[0], 3);

    let loaded = TemplateLibrary::load(&bytes).unwrap();
    assert_eq!(loaded.len(), 3);
    for idx in 0..loaded.len() {
        assert!(loaded.get(idx).is_ok());
    }
    assert_eq!(
        loaded.get(3).unwrap_err(),
        PcbError::IndexOutOfRange {
            index: 3,
            len: 3,
            context: "template"
        }
    );
    assert_eq!(loaded, lib);
}

#[test]
fn records_start_at_fixed_offsets() {
    let mut bytes = vec![0u8; 1 + 2 * TEMPLATE_BYTES];
    bytes[0] = 2;
    // First byte of record 1 sets the top-left cell of template 1 only.
    bytes[1 + TEMPLATE_BYTES] = 0x80;
    // Last byte of record 0 sets the bottom-right cell of template 0 only.
    bytes[TEMPLATE_BYTES] = 0x01;

    let lib = TemplateLibrary::load(&bytes).unwrap();
    let t0 = lib.get(0).unwrap();
    let t1 = lib.get(1).unwrap();
    assert!(t0.get(31, 31));
    assert_eq!(t0.foreground_count(), 1);
    assert!(t1.get(0, 0));
    assert_eq!(t1.foreground_count(), 1);
}

#[test]
fn trailing_bytes_are_ignored() {
    let lib = TemplateLibrary::from_templates(sample_templates()).unwrap();
    let mut bytes = lib.to_bytes();
    bytes.extend_from_slice(&[0xFF; 57]);
    assert_eq!(TemplateLibrary::load(&bytes).unwrap(), lib);
}

#[test]
fn declared_count_beyond_data_is_malformed() {
    let mut bytes = vec![5u8];
    bytes.extend(vec![0u8; 4 * TEMPLATE_BYTES]);
    assert_eq!(
        TemplateLibrary::load(&bytes).unwrap_err(),
        PcbError::MalformedLibrary {
            needed: 1 + 5 * TEMPLATE_BYTES,
            got: 1 + 4 * TEMPLATE_BYTES
        }
    );
}

#[test]
fn maximum_count_library_loads() {
    let mut bytes = vec![255u8];
    bytes.extend(vec![0xA5u8; 255 * TEMPLATE_BYTES]);
    let lib = TemplateLibrary::load(&bytes).unwrap();
    assert_eq!(lib.len(), 255);
    assert!(lib.get(254).is_ok());
    assert!(lib.get(255).is_err());
    assert_eq!(lib.to_bytes(), bytes);
}
