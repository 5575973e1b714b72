use common::Point;
use env::Control;

pub type Rect = [f64; 4];

pub const SCREEN_WIDTH: u32 = 760;
pub const SCREEN_HEIGHT: u32 = 640;

pub const TOOLBAR: [(Control, Rect); 4] = [
    (Control::Load, [10., 10., 175., 30.]),
    (Control::Classify, [195., 10., 175., 30.]),
    (Control::Visualize, [380., 10., 175., 30.]),
    (Control::Translate, [565., 10., 175., 30.]),
];

pub const CANVAS: Rect = [10., 50., 500., 400.];
pub const CHART: Rect = [520., 50., 180., 400.];
pub const INFO_PANEL: Rect = [10., 460., 740., 170.];

pub const MODAL: Rect = [200., 200., 360., 200.];
pub const MODAL_OK: Rect = [340., 360., 80., 28.];

pub fn contains(rect: &Rect, point: Point) -> bool {
    point.x >= rect[0] && point.x < rect[0] + rect[2] &&
        point.y >= rect[1] && point.y < rect[1] + rect[3]
}

pub fn control_at(point: Point) -> Option<Control> {
    TOOLBAR.iter()
        .find(|&&(_, ref rect)| contains(rect, point))
        .map(|&(control, _)| control)
}

pub fn prompt_field(index: usize) -> Rect {
    [MODAL[0] + 20., MODAL[1] + 60. + index as f64 * 55., MODAL[2] - 40., 26.]
}

pub fn prompt_field_at(point: Point, fields_count: usize) -> Option<usize> {
    (0 .. fields_count).find(|&index| contains(&prompt_field(index), point))
}

#[cfg(test)]
mod tests {
    use common::Point;
    use env::Control;
    use super::{control_at, prompt_field_at, contains, MODAL, MODAL_OK, CANVAS, CHART, INFO_PANEL};

    #[test]
    fn toolbar_hits() {
        assert_eq!(control_at(Point { x: 20., y: 20., }), Some(Control::Load));
        assert_eq!(control_at(Point { x: 300., y: 39., }), Some(Control::Classify));
        assert_eq!(control_at(Point { x: 500., y: 11., }), Some(Control::Visualize));
        assert_eq!(control_at(Point { x: 739., y: 25., }), Some(Control::Translate));
        assert_eq!(control_at(Point { x: 190., y: 20., }), None);
        assert_eq!(control_at(Point { x: 100., y: 100., }), None);
    }

    #[test]
    fn prompt_fields_hits() {
        assert_eq!(prompt_field_at(Point { x: 300., y: 270., }, 2), Some(0));
        assert_eq!(prompt_field_at(Point { x: 300., y: 325., }, 2), Some(1));
        assert_eq!(prompt_field_at(Point { x: 300., y: 325., }, 1), None);
    }

    #[test]
    fn panels_fit_the_window() {
        for rect in &[CANVAS, CHART, INFO_PANEL, MODAL] {
            assert!(rect[0] + rect[2] <= super::SCREEN_WIDTH as f64);
            assert!(rect[1] + rect[3] <= super::SCREEN_HEIGHT as f64);
        }
        assert!(contains(&MODAL, Point { x: MODAL_OK[0], y: MODAL_OK[1], }));
        assert!(!contains(&super::prompt_field(1), Point { x: MODAL_OK[0], y: MODAL_OK[1], }));
    }
}
