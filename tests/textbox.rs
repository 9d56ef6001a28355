use glam::IVec2;
use pac_dialog::constants::{colors, TEXT_BOX_HEIGHT, TEXT_BOX_MAX_LEN, TEXT_BOX_WIDTH};
use pac_dialog::geometry::Rect;
use pac_dialog::textbox::{split_lines, Edit, TextBox};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn text_box(text: &str) -> TextBox {
    TextBox::new(text, colors::BLACK, Rect::new(0, 0, 780, 190))
}

#[test]
fn test_new_text_is_cut_to_the_buffer() {
    let text_box = text_box("abcdefghijklmnopqrstuvwxyz");
    assert_that(&text_box.text()).is_equal_to("abcdefghijklmnopqrs");
    assert!(text_box.is_full());
}

#[test]
fn test_input_appends_until_full() {
    let mut text_box = text_box("hey");
    assert_eq!(text_box.input("!"), Edit::Changed);
    assert_eq!(text_box.text(), "hey!");

    assert_eq!(text_box.input("0123456789abcdefghij"), Edit::Changed);
    assert_eq!(text_box.text().len(), TEXT_BOX_MAX_LEN);
    assert_eq!(text_box.input("z"), Edit::Unchanged);
}

#[test]
fn test_multibyte_input_never_splits_a_character() {
    let mut text_box = text_box("abcdefghijklmnopq");
    text_box.input("éé");
    assert_eq!(text_box.text(), "abcdefghijklmnopqé");
}

#[test]
fn test_editing_clears_the_saved_mark() {
    let mut text_box = text_box("hi");
    assert_eq!(text_box.submit(), Edit::Submitted("hi".to_string()));
    assert!(text_box.saved);

    assert_eq!(text_box.backspace(), Edit::Changed);
    assert!(!text_box.saved);
    assert_eq!(text_box.text(), "h");

    text_box.submit();
    text_box.input("o");
    assert!(!text_box.saved);
}

#[test]
fn test_empty_buffer_edits() {
    let mut text_box = text_box("");
    assert_eq!(text_box.backspace(), Edit::Unchanged);
    assert_eq!(text_box.submit(), Edit::Unchanged);
    assert!(!text_box.saved);
}

#[test]
fn test_lines_split_every_ten_bytes() {
    let text_box = text_box("abcdefghijklmno");
    assert_eq!(text_box.lines().into_vec(), vec!["abcdefghij", "klmno"]);

    // A full first line still opens an empty second one
    assert_that(&split_lines("abcdefghij").len()).is_equal_to(2);
    assert_that(&split_lines("").len()).is_equal_to(1);
    assert_that(&split_lines("abcdefghi").len()).is_equal_to(1);
}

#[test]
fn test_lines_keep_multibyte_characters_whole() {
    // 'é' takes bytes 9..11 and moves to the second line
    let boxed = text_box("aaaaaaaaaébc");
    assert_eq!(boxed.lines().into_vec(), vec!["aaaaaaaaa", "ébc"]);
    assert_eq!(boxed.lines().concat(), boxed.text());

    let wide = text_box("ééééééééé");
    let lines = wide.lines();
    assert_eq!(lines.concat(), wide.text());
    assert!(lines.iter().all(|line| line.len() <= 10));
    assert_that(&wide.line_count()).is_equal_to(2);
}

#[test]
fn test_anchor_grows_upwards_per_line() {
    let mut one_line = text_box("short");
    one_line.anchor(IVec2::new(100, 300), 40);
    assert_eq!(one_line.rect(), Rect::new(197, 203, TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT));

    let mut two_lines = text_box("abcdefghijklmno");
    two_lines.anchor(IVec2::new(100, 300), 40);
    assert_eq!(two_lines.rect(), Rect::new(197, 163, TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT + 40));
}

#[test]
fn test_shrinking_back_restores_the_panel() {
    let mut text_box = text_box("abcdefghijklmno");
    text_box.anchor(IVec2::new(100, 300), 40);
    for _ in 0..10 {
        text_box.backspace();
    }
    text_box.anchor(IVec2::new(100, 300), 40);
    assert_eq!(text_box.rect().size(), IVec2::new(TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT));
}
