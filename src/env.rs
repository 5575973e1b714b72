use common::{Point, Segment};
use classify::{Bucket, Classification};
use prompt::{Prompt, Purpose};
use loader;
use translate;
use layout;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    Load,
    Classify,
    Visualize,
    Translate,
}

impl Control {
    pub fn caption(&self) -> &'static str {
        match self {
            &Control::Load => "Load file <L>",
            &Control::Classify => "Classify by length <C>",
            &Control::Visualize => "Visualize <V>",
            &Control::Translate => "Translate <T>",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub text: String,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Modal {
    Notice(Notice),
    Prompt(Prompt),
}

pub struct Env {
    pub segments: Vec<Segment>,
    pub classification: Option<Classification>,
    pub canvas_shown: bool,
    pub canvas_titled: bool,
    pub modal: Option<Modal>,
    pub cursor: Option<Point>,
    input_path: String,
}

impl Env {
    pub fn new(input_path: &str) -> Env {
        Env {
            segments: Vec::new(),
            classification: None,
            canvas_shown: false,
            canvas_titled: false,
            modal: None,
            cursor: None,
            input_path: input_path.to_string(),
        }
    }

    pub fn activate(&mut self, control: Control) {
        if self.modal.is_some() {
            return;
        }
        debug!("activating {:?}", control);
        match control {
            Control::Load =>
                self.modal = Some(Modal::Prompt(Prompt::load(&self.input_path))),
            Control::Classify =>
                self.classify(),
            Control::Visualize =>
                self.visualize(),
            Control::Translate =>
                if self.require_data() {
                    self.modal = Some(Modal::Prompt(Prompt::translate()));
                },
        }
    }

    /// Replaces the current segments with the file contents. An empty path means
    /// nothing was selected and leaves the state untouched.
    pub fn load(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            debug!("no file selected");
            return;
        }
        self.segments.clear();
        self.classification = None;
        self.canvas_shown = false;
        self.canvas_titled = false;
        self.input_path = path.to_string();

        match loader::load_file(path) {
            Ok(segments) => {
                info!("loaded {} segments from {}", segments.len(), path);
                self.segments = segments;
                self.notify(Severity::Info, "Success", format!("Loaded segments: {}", self.segments.len()));
            },
            Err(error) => {
                warn!("load of {} failed: {}", path, error);
                self.notify(Severity::Error, "Error", error.to_string());
            },
        }
    }

    pub fn classify(&mut self) {
        if !self.require_data() {
            return;
        }
        let classification = Classification::of(&self.segments);
        info!(
            "classified {} segments: {} short, {} medium, {} long",
            classification.total(),
            classification.count(Bucket::Short),
            classification.count(Bucket::Medium),
            classification.count(Bucket::Long),
        );
        self.classification = Some(classification);
        self.canvas_shown = true;
        self.canvas_titled = false;
        self.notify(Severity::Info, "Done", "Classification is done and displayed.".to_string());
    }

    pub fn visualize(&mut self) {
        if self.require_data() {
            self.canvas_shown = true;
            self.canvas_titled = true;
        }
    }

    pub fn translate(&mut self, dx: &str, dy: &str) {
        if !self.require_data() {
            return;
        }
        match translate::parse_offsets(dx, dy) {
            Ok((dx, dy)) => {
                translate::translate_all(&mut self.segments, dx, dy);
                info!("translated {} segments by ({}, {})", self.segments.len(), dx, dy);
                self.visualize();
            },
            Err(error) => {
                warn!("translation rejected: {}", error);
                self.notify(Severity::Error, "Error", error.to_string());
            },
        }
    }

    /// Bucket color from the classification when present, else from the segment length.
    pub fn segment_color(&self, index: usize, segment: &Segment) -> [f32; 4] {
        self.classification.as_ref()
            .and_then(|classification| classification.bucket_of(index))
            .unwrap_or_else(|| Bucket::of_segment(segment))
            .color()
    }

    pub fn info_lines(&self) -> Vec<String> {
        if self.segments.is_empty() {
            return vec!["No segments loaded. Use 'Load file'.".to_string()];
        }
        let mut lines = vec![format!("Segments total: {}", self.segments.len()), String::new()];
        if let Some(ref classification) = self.classification {
            lines.push("SEGMENT GROUPS:".to_string());
            for (bucket, count) in classification.occupied() {
                lines.push(format!("* {}: {} segments", bucket.label(), count));
            }
        } else {
            lines.push("Classification is not done. Use 'Classify by length'.".to_string());
        }
        lines
    }

    pub fn type_text(&mut self, text: &str) {
        if let Some(Modal::Prompt(ref mut prompt)) = self.modal {
            prompt.type_text(text);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(Modal::Prompt(ref mut prompt)) = self.modal {
            prompt.backspace();
        }
    }

    pub fn next_field(&mut self) {
        if let Some(Modal::Prompt(ref mut prompt)) = self.modal {
            prompt.next_field();
        }
    }

    /// Dismisses a notice or submits a prompt.
    pub fn confirm(&mut self) {
        match self.modal.take() {
            Some(Modal::Prompt(prompt)) => {
                let values = prompt.values();
                match prompt.purpose {
                    Purpose::Load =>
                        self.load(values[0]),
                    Purpose::Translate =>
                        self.translate(values[0], values[1]),
                }
            },
            Some(Modal::Notice(_)) | None =>
                (),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(modal) = self.modal.take() {
            debug!("cancelled {:?}", modal);
        }
    }

    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point { x, y, });
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn click(&mut self) {
        let point = match self.cursor {
            Some(point) => point,
            None => return,
        };
        let field_hit = match self.modal {
            None => {
                if let Some(control) = layout::control_at(point) {
                    self.activate(control);
                }
                return;
            },
            Some(Modal::Prompt(ref prompt)) =>
                layout::prompt_field_at(point, prompt.fields.len()),
            Some(Modal::Notice(_)) =>
                None,
        };
        if layout::contains(&layout::MODAL_OK, point) {
            self.confirm();
        } else if let (Some(index), Some(&mut Modal::Prompt(ref mut prompt))) = (field_hit, self.modal.as_mut()) {
            prompt.select_field(index);
        }
    }

    fn require_data(&mut self) -> bool {
        if self.segments.is_empty() {
            warn!("operation requires loaded segments");
            self.notify(Severity::Warning, "No data", "Load a file first.".to_string());
            false
        } else {
            true
        }
    }

    fn notify(&mut self, severity: Severity, title: &'static str, text: String) {
        self.modal = Some(Modal::Notice(Notice { severity, title, text, }));
    }
}
