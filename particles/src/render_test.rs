use super::*;

#[test]
fn line_color_embeds_opacity() {
    assert_eq!(line_color(0.25), "rgba(99, 179, 237, 0.25)");
}

#[test]
fn line_color_at_max_opacity() {
    assert_eq!(line_color(0.5), "rgba(99, 179, 237, 0.5)");
}
