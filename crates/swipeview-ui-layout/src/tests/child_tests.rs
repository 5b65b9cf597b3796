use super::*;

fn child(width: f32) -> ChildLayout {
    ChildLayout::new(Rect::new(0.0, 0.0, width, 40.0))
}

#[test]
fn total_width_includes_margins() {
    let layout = child(100.0).with_margins(EdgeInsets::from_components(8.0, 0.0, 12.0, 0.0));
    assert_eq!(layout.total_width(), 120.0);
}

#[test]
fn start_and_end_margins_follow_layout_direction() {
    let margins = EdgeInsets::from_components(4.0, 0.0, 16.0, 0.0);
    let ltr = child(10.0).with_margins(margins);
    assert_eq!(ltr.margin_start(), 4.0);
    assert_eq!(ltr.margin_end(), 16.0);

    let rtl = ltr.with_layout_direction(LayoutDirection::Rtl);
    assert_eq!(rtl.margin_start(), 16.0);
    assert_eq!(rtl.margin_end(), 4.0);
}

#[test]
fn end_alignment_is_right_only_in_ltr() {
    let end = child(10.0).with_alignment(HorizontalAlignment::End);
    assert!(end.is_right_aligned());
    assert!(!end
        .with_layout_direction(LayoutDirection::Rtl)
        .is_right_aligned());
}

#[test]
fn start_alignment_is_right_in_rtl() {
    let start = child(10.0)
        .with_alignment(HorizontalAlignment::Start)
        .with_layout_direction(LayoutDirection::Rtl);
    assert!(start.is_right_aligned());
}

#[test]
fn absolute_alignment_ignores_direction() {
    for direction in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
        let right = child(10.0)
            .with_alignment(HorizontalAlignment::Right)
            .with_layout_direction(direction);
        assert!(right.is_right_aligned(), "right stays right in {direction:?}");
        let left = right.with_alignment(HorizontalAlignment::Left);
        assert!(!left.is_right_aligned(), "left stays left in {direction:?}");
    }
}

#[test]
fn missing_or_centered_alignment_is_not_right() {
    assert!(!child(10.0).is_right_aligned());
    assert!(!child(10.0)
        .with_alignment(HorizontalAlignment::CenterHorizontally)
        .is_right_aligned());
}

#[test]
fn align_offsets_resolve_direction() {
    let end = HorizontalAlignment::End;
    assert_eq!(end.align(100.0, 40.0, LayoutDirection::Ltr), 60.0);
    assert_eq!(end.align(100.0, 40.0, LayoutDirection::Rtl), 0.0);
    assert_eq!(
        HorizontalAlignment::CenterHorizontally.align(100.0, 40.0, LayoutDirection::Ltr),
        30.0
    );
}
