//! EPUB extraction against a small book assembled in a temp file.

use simplify_reader::extract::open_document;
use std::io::Write;
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const CONTAINER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

const PACKAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="bookid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:identifier id="bookid">urn:uuid:0b7a3c1e-5d2f-4f2a-9a51-7d0c1f3e2b10</dc:identifier>
    <dc:title>Small Tales</dc:title>
    <dc:creator>Ann Author</dc:creator>
    <dc:creator>Bo Writer</dc:creator>
    <dc:language>en</dc:language>
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
    <item id="cover" href="cover.xhtml" media-type="application/xhtml+xml"/>
    <item id="ch1" href="ch1.xhtml" media-type="application/xhtml+xml"/>
    <item id="ch2" href="ch2.xhtml" media-type="application/xhtml+xml"/>
  </manifest>
  <spine toc="ncx">
    <itemref idref="cover"/>
    <itemref idref="ch1"/>
    <itemref idref="ch2"/>
  </spine>
</package>"#;

const NCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head><meta name="dtb:uid" content="urn:uuid:0b7a3c1e-5d2f-4f2a-9a51-7d0c1f3e2b10"/></head>
  <docTitle><text>Small Tales</text></docTitle>
  <navMap>
    <navPoint id="n1" playOrder="1"><navLabel><text>The Beginning</text></navLabel><content src="ch1.xhtml"/></navPoint>
    <navPoint id="n2" playOrder="2"><navLabel><text>Part Two</text></navLabel><content src="ch2.xhtml"/></navPoint>
  </navMap>
</ncx>"#;

const COVER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml"><head></head>
<body><div><img src="cover.png" alt=""/></div></body></html>"#;

const CHAPTER_ONE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml"><head></head>
<body>
<h1>The Beginning</h1>
<p>First paragraph.</p>
<p>Second <em>paragraph</em> with a <a href="ch2.xhtml">link</a>.</p>
</body></html>"#;

const CHAPTER_TWO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml"><head></head>
<body><p>No heading here.</p></body></html>"#;

fn build_epub() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".epub").tempfile().unwrap();
    {
        let mut zip = ZipWriter::new(file.as_file_mut());
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        // mimetype must be the first, uncompressed entry
        zip.start_file("mimetype", stored).unwrap();
        zip.write_all(b"application/epub+zip").unwrap();

        let entries = [
            ("META-INF/container.xml", CONTAINER),
            ("OEBPS/content.opf", PACKAGE),
            ("OEBPS/toc.ncx", NCX),
            ("OEBPS/cover.xhtml", COVER),
            ("OEBPS/ch1.xhtml", CHAPTER_ONE),
            ("OEBPS/ch2.xhtml", CHAPTER_TWO),
        ];
        for (name, content) in entries {
            zip.start_file(name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    file
}

#[test]
fn reads_chapters_and_metadata() {
    let epub = build_epub();
    let document = open_document(epub.path()).unwrap();

    // the image-only cover page carries no text
    assert_eq!(document.len(), 2);

    let first = document.chapter(0).unwrap();
    assert_eq!(first.title, "The Beginning");
    assert!(first.body.starts_with("The Beginning"));
    assert!(first.body.contains("First paragraph.\n\nSecond paragraph with a link."));
    assert!(!first.body.contains('<'));
    assert!(!first.body.contains('*'));

    let second = document.chapter(1).unwrap();
    assert_eq!(second.title, "Chapter 2");
    assert_eq!(second.body, "No heading here.");

    let metadata = document.metadata();
    assert_eq!(metadata.title.as_deref(), Some("Small Tales"));
    assert_eq!(metadata.authors, vec!["Ann Author", "Bo Writer"]);
    assert_eq!(metadata.language.as_deref(), Some("en"));
}
