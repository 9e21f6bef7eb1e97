use ggez::graphics::{self, Canvas, DrawParam, Mesh, MeshBuilder, PxScale, Quad, Rect, Text};
use ggez::Context;

use crate::app::app_error::AppResult;
use crate::app::scene::DrawCommand;

/// Translate draw commands into ggez draw calls. Lines are batched into
/// a single mesh drawn behind everything else, text is skipped when no
/// font could be loaded
pub fn draw_commands(
    commands: &[DrawCommand],
    font: Option<&str>,
    canvas: &mut Canvas,
    ctx: &Context,
) -> AppResult {
    let mut lines = MeshBuilder::new();
    let mut has_lines = false;
    for command in commands {
        if let DrawCommand::Line { from, to, thickness, color } = command {
            lines.line(&[*from, *to], *thickness, graphics::Color::from(*color))?;
            has_lines = true;
        }
    }
    if has_lines {
        let mesh = Mesh::from_data(ctx, lines.build());
        canvas.draw(&mesh, DrawParam::default());
    }

    for command in commands {
        match command {
            DrawCommand::Cell { pos, side, color } => {
                let side = *side as f32;
                let rect = Rect::new(pos.x as f32, pos.y as f32, side, side);
                canvas.draw(&Quad, DrawParam::default().dest_rect(rect).color(*color));
            }
            DrawCommand::Text { text, dest, font_size, color } => {
                if let Some(font) = font {
                    let mut text = Text::new(text.as_str());
                    text.set_font(font).set_scale(PxScale::from(*font_size));
                    canvas.draw(&text, DrawParam::default().dest(*dest).color(*color));
                }
            }
            DrawCommand::Line { .. } => {}
        }
    }

    Ok(())
}
