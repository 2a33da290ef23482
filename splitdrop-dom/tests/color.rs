use splitdrop_dom::{Color, Rgb};

fn close_to(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 1
}

#[test]
fn test_hex_parsing() {
    assert_eq!(Color::hex("#949494"), Some(Color::rgb(148, 148, 148)));
    assert_eq!(Color::hex("#38abdf"), Some(Color::rgb(56, 171, 223)));
    assert_eq!(Color::hex("949494"), None);
    assert_eq!(Color::hex("#12345"), None);
    assert_eq!(Color::hex("#gg0000"), None);
}

#[test]
fn test_css_notation() {
    assert_eq!(Color::rgb(0x94, 0x94, 0x94).to_css(), "#949494");
    assert_eq!(
        Color::rgba(56, 171, 223, 0.35).to_css(),
        "rgba(56, 171, 223, 0.35)"
    );
}

#[test]
fn test_alpha() {
    assert_eq!(Color::rgb(1, 2, 3).alpha(), 1.0);
    assert_eq!(Color::rgba(1, 2, 3, 0.5).alpha(), 0.5);
    assert_eq!(Color::rgba(1, 2, 3, 4.0).alpha(), 1.0);
}

#[test]
fn test_opaque_over_is_identity() {
    let bg = Rgb::new(10, 20, 30);
    assert_eq!(Color::rgb(200, 100, 50).over(bg), Rgb::new(200, 100, 50));
}

#[test]
fn test_alpha_extremes() {
    let bg = Rgb::new(10, 20, 30);

    let clear = Color::rgba(200, 100, 50, 0.0).over(bg);
    assert!(close_to(clear.r, 10) && close_to(clear.g, 20) && close_to(clear.b, 30));

    let solid = Color::rgba(200, 100, 50, 1.0).over(bg);
    assert!(close_to(solid.r, 200) && close_to(solid.g, 100) && close_to(solid.b, 50));
}

#[test]
fn test_translucent_blends_between() {
    let out = Color::rgba(56, 171, 223, 0.35).over(Rgb::new(0, 0, 0));

    assert!(out.r <= 56 && out.g <= 171 && out.b <= 223);
    assert!(out.b > 0 && out.b > out.r);
}
