use minifb::{Key, Window, WindowOptions};

use crate::contour::ContourLevels;
use crate::error::{FieldError, Result};
use crate::field::EscapeSurface;
use crate::image::render_gray;

// Simple 3x5 pixel font
fn glyph(ch: char) -> &'static [u8] {
    match ch {
        '0' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => &[0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => &[0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => &[0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => &[0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => &[0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => &[0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => &[0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => &[0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => &[0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => &[0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => &[0b000, 0b000, 0b111, 0b000, 0b000],
        ':' => &[0b000, 0b010, 0b000, 0b010, 0b000],
        ' ' => &[0b000, 0b000, 0b000, 0b000, 0b000],
        'x' => &[0b000, 0b101, 0b010, 0b101, 0b000],
        'y' => &[0b101, 0b101, 0b111, 0b010, 0b010],
        'i' => &[0b111, 0b010, 0b010, 0b010, 0b111],
        'n' => &[0b101, 0b111, 0b111, 0b111, 0b101],
        _ => &[0b000, 0b000, 0b000, 0b000, 0b000],
    }
}

fn draw_text(buffer: &mut [u32], width: usize, height: usize, x: usize, y: usize, text: &str, color: u32) {
    let mut offset_x = x;
    for ch in text.chars() {
        if offset_x + 4 >= width { break; }
        for (dy, &row) in glyph(ch).iter().enumerate() {
            if y + dy >= height { break; }
            for dx in 0..3 {
                if row & (1 << (2 - dx)) != 0 {
                    buffer[(y + dy) * width + offset_x + dx] = color;
                }
            }
        }
        offset_x += 4;
    }
}

/// Pack the rendered raster as 0RGB pixels for minifb.
pub fn surface_buffer(surface: &EscapeSurface, levels: &ContourLevels) -> Vec<u32> {
    render_gray(surface, levels)
        .pixels()
        .map(|p| {
            let v = p[0] as u32;
            (v << 16) | (v << 8) | v
        })
        .collect()
}

/// Open a window showing the surface; blocks until it is closed or Escape is pressed.
pub fn show_surface(surface: &EscapeSurface, levels: &ContourLevels) -> Result<()> {
    let (rows, cols) = surface.field.shape();
    let mut buffer = surface_buffer(surface, levels);

    let text_color = 0xFF2020;
    let x = surface.x.spec();
    let y = surface.y.spec();
    draw_text(&mut buffer, cols, rows, 4, 4, &format!("x: {:.3} {:.3}", x.lo, x.hi), text_color);
    draw_text(&mut buffer, cols, rows, 4, 12, &format!("y: {:.3} {:.3}", y.lo, y.hi), text_color);
    draw_text(&mut buffer, cols, rows, 4, 20, &format!("in: {}", surface.field.bounded_count()), text_color);

    let mut window = Window::new("escape field", cols, rows, WindowOptions::default())
        .map_err(|e| FieldError::Window(e.to_string()))?;
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&buffer, cols, rows)
            .map_err(|e| FieldError::Window(e.to_string()))?;
    }
    Ok(())
}
