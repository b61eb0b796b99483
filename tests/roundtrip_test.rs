//! Integration tests for writing documents back to OSF XML.

use unosf::model::{Info, Mark, Marks, Paragraph, Style, TextRun};
use unosf::render::{cleanup_self_closing_elements, to_xml, SELF_CLOSING_ELEMENTS, XML_DECLARATION};
use unosf::{parse_bytes, Document};

const FULL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no" ?>
<document type="Open Screenplay Format document" version="20">
  <info uuid="9f2e" title="Salt &amp; Iron" title_format="0" written_by="K. Vale" copyright="2024" contact="kv@example.com" drafts="3" pagecount="98"/>
  <settings page_width="8.50" page_height="11.00" margin_top="1.00" margin_bottom="1.00" margin_left="1.50" margin_right="1.00" normal_linesperinch="6.00" dialogue_continues="1" cont_text="(CONT'D)" more_text="(MORE)" continued_text="CONTINUED:" omitted_text="OMITTED" pagenumber_format="0" pagenumber_start="1" pagenumber_first="0" revision="0" show_revisions="1" scene_numbering="0" scenes_locked="0" page_numbering="0" pages_locked="0"/>
  <styles>
    <style name="Action" builtin="1" builtin_index="2" label="Action" basestylename="Action" style_enter="Character" font="Courier Final Draft" size="12" spacebefore="12" style_tab="Character" keepwithnext="0" effects="0" leftindent="1.50" rightindent="7.50" align="Left"/>
  </styles>
  <paragraphs>
    <para page_number="1" bookmark="opening">
      <style basestylename="Scene Heading"/>
      <text>ext. quarry - day</text>
    </para>
    <para>
      <style basestylename="Action"/>
      <text>Dust</text>
      <text bold="1" italic="0" underline="1" strikethrough="0" allcaps="1">everywhere</text>
      <marks>
        <mark at="4" revision="2"/>
      </marks>
    </para>
    <para>
      <text/>
    </para>
  </paragraphs>
  <spelling language="en_US">
    <user_dictionary>
      <entry work="Vale"/>
    </user_dictionary>
  </spelling>
  <lists>
    <characters>
      <character name="KIT"/>
    </characters>
    <locations>
      <location name="QUARRY"/>
    </locations>
    <scene_intros>
      <scene_intro name="EXT."/>
    </scene_intros>
    <scene_times>
      <scene_time name="DAY"/>
    </scene_times>
    <extensions>
      <extension name="O.S."/>
    </extensions>
    <transitions>
      <transition name="FADE OUT."/>
    </transitions>
    <revision_colors>
      <revision_color name="Pink" index="2" color_name="Pink" color_index="5"/>
    </revision_colors>
    <tag_categories>
      <tag_category name="Cast"/>
    </tag_categories>
  </lists>
  <titlepage>
    <para>
      <style basestylename="Normal Text" align="Center"/>
      <text>Salt &amp; Iron</text>
    </para>
  </titlepage>
</document>"#;

fn hand_built_document() -> Document {
    let mut doc = Document::new("Open Screenplay Format document", "20");
    doc.info = Some(Info {
        title: Some("Cats & Dogs".to_string()),
        ..Info::default()
    });

    let mut para = Paragraph::with_style("Dialogue")
        .run(TextRun::new("Less <than> more"))
        .run(TextRun::new("Rain & thunder").with_italic());
    para.marks = Some(Marks {
        items: vec![Mark {
            at: Some("0".to_string()),
            revision: Some("1".to_string()),
        }],
    });
    doc.add_paragraph(para);
    doc.add_paragraph(Paragraph {
        style: Some(Style::default()),
        ..Paragraph::default()
    });
    doc.add_title_paragraph(Paragraph::with_text("CATS & DOGS"));
    doc
}

#[test]
fn test_round_trip_parsed_document() {
    let original = parse_bytes(FULL.as_bytes()).unwrap();
    let xml = to_xml(&original).unwrap();
    let reparsed = parse_bytes(xml.as_bytes()).unwrap();

    assert_eq!(reparsed, original);
    assert_eq!(reparsed.title(), Some("Salt & Iron"));
    assert_eq!(reparsed.render(), original.render());
}

#[test]
fn test_round_trip_hand_built_document() {
    let original = hand_built_document();
    let xml = to_xml(&original).unwrap();

    assert!(xml.contains("&amp;"));
    assert!(xml.contains("&lt;than&gt;"));

    let reparsed = parse_bytes(xml.as_bytes()).unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn test_round_trip_keeps_run_whitespace() {
    let mut doc = Document::new("Open Screenplay Format document", "20");
    doc.add_paragraph(
        Paragraph::with_style("Action")
            .run(TextRun::new("Hello "))
            .run(TextRun::new("   ").with_bold())
            .run(TextRun::new("world")),
    );
    doc.add_title_paragraph(Paragraph::with_text(" Written by "));

    let xml = to_xml(&doc).unwrap();
    let reparsed = parse_bytes(xml.as_bytes()).unwrap();

    assert_eq!(reparsed, doc);
    assert_eq!(reparsed.render(), " Written by \nHello    world\n");
}

#[test]
fn test_output_starts_with_declaration() {
    let xml = to_xml(&hand_built_document()).unwrap();
    assert!(xml.starts_with(XML_DECLARATION));
    assert_eq!(xml.lines().nth(1).map(|l| l.starts_with("<document")), Some(true));
}

#[test]
fn test_output_has_no_empty_pairs() {
    for doc in [parse_bytes(FULL.as_bytes()).unwrap(), hand_built_document()] {
        let xml = to_xml(&doc).unwrap();
        for name in SELF_CLOSING_ELEMENTS {
            let pair = format!("<{0}></{0}>", name);
            assert!(!xml.contains(&pair), "{pair} in output");
        }
    }
}

#[test]
fn test_cleanup_is_idempotent_on_output() {
    let xml = to_xml(&parse_bytes(FULL.as_bytes()).unwrap()).unwrap();
    assert_eq!(cleanup_self_closing_elements(&xml), xml);
}

#[test]
fn test_empty_document_writes_empty_body() {
    let doc = Document::new("Open Screenplay Format document", "20");
    let xml = to_xml(&doc).unwrap();
    assert!(xml.contains("<paragraphs/>"));

    let reparsed = parse_bytes(xml.as_bytes()).unwrap();
    assert_eq!(reparsed, doc);
}
