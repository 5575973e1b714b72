use gfx_core::factory::CombinedError;
use piston_window::{
    clear,
    rectangle,
    text,
    Context,
    G2d,
    Glyphs,
    Line,
    Rectangle,
    Transformed,
};

use classify::Classification;
use env::{Env, Modal, Notice, Severity};
use prompt::Prompt;
use layout::{self, Rect};

type Color = [f32; 4];

const BACKGROUND: Color = [0.92, 0.92, 0.92, 1.0];
const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
const GRAY: Color = [0.6, 0.6, 0.6, 1.0];
const BUTTON: Color = [0.82, 0.82, 0.82, 1.0];
const BUTTON_HOVER: Color = [0.9, 0.9, 0.9, 1.0];
const ACTIVE_FIELD: Color = [0.1, 0.3, 0.9, 1.0];
const SHADE: Color = [0.0, 0.0, 0.0, 0.4];

const CHART_BAR_WIDTH: f64 = 40.;
const CHART_BAR_SPACING: f64 = 20.;
const CHART_LEFT: f64 = 10.;
const CHART_TOP: f64 = 50.;
const CHART_HEIGHT: f64 = 300.;
const NOTICE_WRAP: usize = 44;

pub fn draw(env: &Env, glyphs: &mut Glyphs, c: &Context, g: &mut G2d) -> Result<(), CombinedError> {
    clear(BACKGROUND, g);
    draw_toolbar(env, glyphs, c, g)?;
    draw_canvas(env, glyphs, c, g)?;
    draw_chart(env.classification.as_ref(), glyphs, c, g)?;
    draw_info(env, glyphs, c, g)?;
    match env.modal {
        Some(Modal::Notice(ref notice)) =>
            draw_notice(notice, glyphs, c, g),
        Some(Modal::Prompt(ref prompt)) =>
            draw_prompt(prompt, glyphs, c, g),
        None =>
            Ok(()),
    }
}

fn draw_toolbar(env: &Env, glyphs: &mut Glyphs, c: &Context, g: &mut G2d) -> Result<(), CombinedError> {
    for &(control, rect) in layout::TOOLBAR.iter() {
        let hovered = env.modal.is_none() &&
            env.cursor.map(|point| layout::contains(&rect, point)).unwrap_or(false);
        panel(rect, if hovered { BUTTON_HOVER } else { BUTTON }, c, g);
        label(control.caption(), 13, BLACK, rect[0] + 8., rect[1] + 20., glyphs, c, g)?;
    }
    Ok(())
}

fn draw_canvas(env: &Env, glyphs: &mut Glyphs, c: &Context, g: &mut G2d) -> Result<(), CombinedError> {
    let rect = layout::CANVAS;
    panel(rect, WHITE, c, g);
    if !env.canvas_shown {
        return Ok(());
    }

    let clipped = c.draw_state.scissor([rect[0] as u32, rect[1] as u32, rect[2] as u32, rect[3] as u32]);
    let transform = c.transform.trans(rect[0], rect[1]);
    for (index, segment) in env.segments.iter().enumerate() {
        Line::new(env.segment_color(index, segment), 1.0)
            .draw(segment.coords(), &clipped, transform, g);
    }
    if env.canvas_titled {
        label("Segments on the plane", 16, BLACK, rect[0] + 160., rect[1] + 24., glyphs, c, g)?;
    }
    Ok(())
}

fn draw_chart(
    maybe_classification: Option<&Classification>,
    glyphs: &mut Glyphs,
    c: &Context,
    g: &mut G2d,
)
    -> Result<(), CombinedError>
{
    let rect = layout::CHART;
    panel(rect, WHITE, c, g);
    let classification = match maybe_classification {
        Some(classification) => classification,
        None => {
            label("No data", 13, BLACK, rect[0] + 65., rect[1] + 190., glyphs, c, g)?;
            return label("for chart", 13, BLACK, rect[0] + 62., rect[1] + 208., glyphs, c, g);
        },
    };

    label("Distribution", 14, BLACK, rect[0] + 52., rect[1] + 24., glyphs, c, g)?;
    let bars = classification.occupied();
    let max_count = bars.iter().map(|&(_, count)| count).max().unwrap_or(0);
    for (slot, &(bucket, count)) in bars.iter().enumerate() {
        let height = bar_height(count, max_count);
        let x = rect[0] + CHART_LEFT + slot as f64 * (CHART_BAR_WIDTH + CHART_BAR_SPACING);
        let bottom = rect[1] + CHART_TOP + CHART_HEIGHT;
        let bar = [x, bottom - height, CHART_BAR_WIDTH, height];
        rectangle(bucket.color(), bar, c.transform, g);
        Rectangle::new_border(BLACK, 0.5).draw(bar, &c.draw_state, c.transform, g);
        label(&count.to_string(), 12, BLACK, x + 12., bottom - height - 6., glyphs, c, g)?;
        label(bucket.label(), 11, BLACK, x + 2., bottom + 18., glyphs, c, g)?;
    }
    Ok(())
}

/// Tallest bar spans the chart height minus a margin for its caption.
fn bar_height(count: usize, max_count: usize) -> f64 {
    if max_count == 0 {
        0.
    } else {
        count as f64 * (CHART_HEIGHT - 20.) / max_count as f64
    }
}

fn draw_info(env: &Env, glyphs: &mut Glyphs, c: &Context, g: &mut G2d) -> Result<(), CombinedError> {
    let rect = layout::INFO_PANEL;
    panel(rect, WHITE, c, g);
    for (row, line) in env.info_lines().iter().enumerate() {
        label(line, 12, BLACK, rect[0] + 8., rect[1] + 18. + row as f64 * 16., glyphs, c, g)?;
    }
    Ok(())
}

fn draw_notice(notice: &Notice, glyphs: &mut Glyphs, c: &Context, g: &mut G2d) -> Result<(), CombinedError> {
    let title_color = match notice.severity {
        Severity::Info => BLACK,
        Severity::Warning => [0.8, 0.5, 0.0, 1.0],
        Severity::Error => [0.8, 0.0, 0.0, 1.0],
    };
    let rect = modal_frame(notice.title, title_color, glyphs, c, g)?;
    for (row, line) in wrap(&notice.text, NOTICE_WRAP).iter().enumerate() {
        label(line, 13, BLACK, rect[0] + 20., rect[1] + 70. + row as f64 * 18., glyphs, c, g)?;
    }
    ok_button(glyphs, c, g)
}

fn draw_prompt(prompt: &Prompt, glyphs: &mut Glyphs, c: &Context, g: &mut G2d) -> Result<(), CombinedError> {
    modal_frame(prompt.title(), BLACK, glyphs, c, g)?;
    for (index, field) in prompt.fields.iter().enumerate() {
        let rect = layout::prompt_field(index);
        let active = index == prompt.active;
        rectangle(WHITE, rect, c.transform, g);
        Rectangle::new_border(if active { ACTIVE_FIELD } else { GRAY }, 1.0)
            .draw(rect, &c.draw_state, c.transform, g);
        label(field.caption, 12, BLACK, rect[0], rect[1] - 6., glyphs, c, g)?;
        let value = if active { format!("{}|", field.value) } else { field.value.clone() };
        label(&value, 13, BLACK, rect[0] + 6., rect[1] + 18., glyphs, c, g)?;
    }
    ok_button(glyphs, c, g)
}

fn modal_frame(title: &str, color: Color, glyphs: &mut Glyphs, c: &Context, g: &mut G2d) -> Result<Rect, CombinedError> {
    let rect = layout::MODAL;
    rectangle(SHADE, [0., 0., layout::SCREEN_WIDTH as f64, layout::SCREEN_HEIGHT as f64], c.transform, g);
    panel(rect, BACKGROUND, c, g);
    label(title, 15, color, rect[0] + 20., rect[1] + 30., glyphs, c, g)?;
    Ok(rect)
}

fn ok_button(glyphs: &mut Glyphs, c: &Context, g: &mut G2d) -> Result<(), CombinedError> {
    let rect = layout::MODAL_OK;
    panel(rect, BUTTON, c, g);
    label("OK", 13, BLACK, rect[0] + 30., rect[1] + 19., glyphs, c, g)
}

fn panel(rect: Rect, fill: Color, c: &Context, g: &mut G2d) {
    rectangle(fill, rect, c.transform, g);
    Rectangle::new_border(BLACK, 0.5).draw(rect, &c.draw_state, c.transform, g);
}

fn label(
    line: &str,
    size: u32,
    color: Color,
    x: f64,
    y: f64,
    glyphs: &mut Glyphs,
    c: &Context,
    g: &mut G2d,
)
    -> Result<(), CombinedError>
{
    text::Text::new_color(color, size)
        .draw(line, glyphs, &c.draw_state, c.transform.trans(x, y), g)
}

fn wrap(line: &str, width: usize) -> Vec<String> {
    let mut rows: Vec<String> = Vec::new();
    for word in line.split_whitespace() {
        let fits = rows.last()
            .map(|row| row.chars().count() + 1 + word.chars().count() <= width)
            .unwrap_or(false);
        match rows.last_mut() {
            Some(row) if fits => {
                row.push(' ');
                row.push_str(word);
            },
            _ =>
                rows.push(word.to_string()),
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::{wrap, bar_height, CHART_HEIGHT};

    #[test]
    fn wrap_by_words() {
        assert_eq!(wrap("Invalid line 2: 1 2 3", 10), vec!["Invalid", "line 2: 1", "2 3"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
        assert_eq!(wrap("averyveryverylongword x", 5), vec!["averyveryverylongword", "x"]);
    }

    #[test]
    fn tallest_bar_leaves_caption_room() {
        assert_eq!(bar_height(4, 4), CHART_HEIGHT - 20.);
        assert_eq!(bar_height(2, 4), (CHART_HEIGHT - 20.) / 2.);
        assert_eq!(bar_height(0, 0), 0.);
    }
}
