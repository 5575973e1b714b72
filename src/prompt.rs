#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Purpose {
    Load,
    Translate,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Field {
    pub caption: &'static str,
    pub value: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Prompt {
    pub purpose: Purpose,
    pub fields: Vec<Field>,
    pub active: usize,
}

impl Prompt {
    pub fn load(default_path: &str) -> Prompt {
        Prompt {
            purpose: Purpose::Load,
            fields: vec![
                Field { caption: "Segments file:", value: default_path.to_string(), },
            ],
            active: 0,
        }
    }

    pub fn translate() -> Prompt {
        Prompt {
            purpose: Purpose::Translate,
            fields: vec![
                Field { caption: "Shift by X:", value: String::new(), },
                Field { caption: "Shift by Y:", value: String::new(), },
            ],
            active: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.purpose {
            Purpose::Load => "Load file",
            Purpose::Translate => "Enter offsets",
        }
    }

    pub fn type_text(&mut self, text: &str) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.value.extend(text.chars().filter(|c| !c.is_control()));
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.value.pop();
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    pub fn select_field(&mut self, index: usize) {
        if index < self.fields.len() {
            self.active = index;
        }
    }

    pub fn values(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.value.as_str()).collect()
    }
}
