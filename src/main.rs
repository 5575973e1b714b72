extern crate gfx_core;
extern crate env_logger;
extern crate piston_window;
#[macro_use] extern crate log;
#[macro_use] extern crate clap;
#[cfg(test)] extern crate rand;
#[cfg(test)] extern crate tempfile;

use std::{io, process};
use std::path::PathBuf;

use clap::Arg;
use piston_window::{
    OpenGL,
    PistonWindow,
    WindowSettings,
    TextureSettings,
    Glyphs,
    Event,
    Input,
    Button,
    ButtonArgs,
    ButtonState,
    MouseButton,
    Motion,
    Key,
};

mod common;
mod loader;
mod classify;
mod translate;
mod prompt;
mod layout;
mod env;
mod render;

use env::{Env, Control};

fn main() {
    env_logger::init();
    match run() {
        Ok(()) =>
            info!("graceful shutdown"),
        Err(e) => {
            error!("fatal error: {:?}", e);
            process::exit(1);
        },
    }
}

#[derive(Debug)]
enum Error {
    MissingParameter(&'static str),
    Piston(PistonError),
}

#[derive(Debug)]
enum PistonError {
    BuildWindow(String),
    LoadFont { file: String, error: io::Error, },
    DrawText(gfx_core::factory::CombinedError),
}

fn run() -> Result<(), Error> {
    let matches = app_from_crate!()
        .arg(Arg::with_name("assets-dir")
             .short("a")
             .long("assets-dir")
             .value_name("DIR")
             .help("Graphics resources directory")
             .default_value("./assets")
             .takes_value(true))
        .arg(Arg::with_name("input")
             .short("i")
             .long("input")
             .value_name("FILE")
             .help("Segments file offered by the load dialog")
             .default_value("products.txt")
             .takes_value(true))
        .get_matches();

    let assets_dir = matches.value_of("assets-dir")
        .ok_or(Error::MissingParameter("assets-dir"))?;
    let input = matches.value_of("input")
        .ok_or(Error::MissingParameter("input"))?;

    let opengl = OpenGL::V4_1;
    let mut window: PistonWindow = WindowSettings::new("Segments analysis", [layout::SCREEN_WIDTH, layout::SCREEN_HEIGHT])
        .exit_on_esc(false)
        .resizable(false)
        .opengl(opengl)
        .build()
        .map_err(PistonError::BuildWindow)
        .map_err(Error::Piston)?;

    let mut font_path = PathBuf::from(assets_dir);
    font_path.push("FiraSans-Regular.ttf");
    let mut glyphs = Glyphs::new(&font_path, window.factory.clone(), TextureSettings::new())
        .map_err(|e| Error::Piston(PistonError::LoadFont {
            file: font_path.to_string_lossy().to_string(),
            error: e,
        }))?;

    let mut env = Env::new(input);
    while let Some(event) = window.next() {
        let maybe_result = window.draw_2d(&event, |context, g2d| {
            render::draw(&env, &mut glyphs, &context, g2d)
                .map_err(PistonError::DrawText)
        });
        if let Some(result) = maybe_result {
            let () = result.map_err(Error::Piston)?;
        }

        match event {
            Event::Input(Input::Button(ButtonArgs { button: Button::Keyboard(key), state, .. })) =>
                if !handle_key(&mut env, key, state) {
                    break;
                },
            Event::Input(Input::Text(text)) =>
                env.type_text(&text),
            Event::Input(Input::Move(Motion::MouseCursor(x, y))) =>
                env.set_cursor(x, y),
            Event::Input(Input::Cursor(false)) =>
                env.reset_cursor(),
            Event::Input(Input::Button(ButtonArgs { button: Button::Mouse(MouseButton::Left), state: ButtonState::Release, .. })) =>
                env.click(),
            Event::Input(Input::Resize(width, height)) =>
                debug!("window resized to {}x{}", width, height),
            _ =>
                (),
        }
    }

    Ok(())
}

/// Returns `false` when the user asks to quit.
fn handle_key(env: &mut Env, key: Key, state: ButtonState) -> bool {
    if env.modal.is_some() {
        match (key, state) {
            (Key::Return, ButtonState::Release) | (Key::NumPadEnter, ButtonState::Release) =>
                env.confirm(),
            (Key::Escape, ButtonState::Release) =>
                env.cancel(),
            (Key::Tab, ButtonState::Release) =>
                env.next_field(),
            (Key::Backspace, ButtonState::Press) =>
                env.backspace(),
            _ =>
                (),
        }
        return true;
    }

    match (key, state) {
        (Key::Q, ButtonState::Release) =>
            return false,
        (Key::L, ButtonState::Release) =>
            env.activate(Control::Load),
        (Key::C, ButtonState::Release) =>
            env.activate(Control::Classify),
        (Key::V, ButtonState::Release) =>
            env.activate(Control::Visualize),
        (Key::T, ButtonState::Release) =>
            env.activate(Control::Translate),
        _ =>
            (),
    }
    true
}

#[cfg(test)]
mod tests {
    use piston_window::{ButtonState, Key};
    use env::{Env, Modal};
    use super::handle_key;

    #[test]
    fn shortcuts_and_quit() {
        let mut env = Env::new("products.txt");
        assert!(handle_key(&mut env, Key::L, ButtonState::Release));
        match env.modal {
            Some(Modal::Prompt(_)) => (),
            ref other => panic!("unexpected modal: {:?}", other),
        }
        // modal swallows shortcuts
        assert!(handle_key(&mut env, Key::Q, ButtonState::Release));
        assert!(handle_key(&mut env, Key::Escape, ButtonState::Release));
        assert!(env.modal.is_none());
        assert!(!handle_key(&mut env, Key::Q, ButtonState::Release));
    }

    #[test]
    fn prompt_editing_keys() {
        let mut env = Env::new("abc");
        handle_key(&mut env, Key::L, ButtonState::Release);
        handle_key(&mut env, Key::Backspace, ButtonState::Press);
        handle_key(&mut env, Key::Backspace, ButtonState::Release);
        match env.modal {
            Some(Modal::Prompt(ref prompt)) => assert_eq!(prompt.values(), vec!["ab"]),
            ref other => panic!("unexpected modal: {:?}", other),
        }
        // empty selection loads nothing
        handle_key(&mut env, Key::Backspace, ButtonState::Press);
        handle_key(&mut env, Key::Backspace, ButtonState::Press);
        handle_key(&mut env, Key::Return, ButtonState::Release);
        assert!(env.modal.is_none());
        assert!(env.segments.is_empty());
    }
}
