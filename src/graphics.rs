use creatures::simulation::frame::Frame;
use macroquad::prelude::*;

/// GPU copy of the simulation frame.
pub struct FrameTexture {
    texture: Texture2D,
}

impl FrameTexture {
    pub fn new(frame: &Frame) -> Self {
        let texture = Texture2D::from_rgba8(frame.width() as u16, frame.height() as u16, frame.as_bytes());
        texture.set_filter(FilterMode::Nearest);
        Self { texture }
    }

    pub fn upload(&self, frame: &Frame) {
        self.texture
            .update_from_bytes(frame.width() as u32, frame.height() as u32, frame.as_bytes());
    }

    pub fn draw(&self, dest: Rect) {
        draw_texture_ex(
            &self.texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                ..Default::default()
            },
        );
    }
}

/// Largest rectangle with the frame's aspect ratio that fits centred in `area`.
pub fn letterbox(frame: &Frame, area: Rect) -> Rect {
    let (fw, fh) = (frame.width() as f32, frame.height() as f32);
    let scale = (area.w / fw).min(area.h / fh);
    let (w, h) = (fw * scale, fh * scale);
    Rect::new(area.x + (area.w - w) / 2.0, area.y + (area.h - h) / 2.0, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_pillarboxes_tall_frame() {
        let frame = Frame::new(100, 200);
        let r = letterbox(&frame, Rect::new(0.0, 0.0, 400.0, 400.0));
        assert_eq!((r.w, r.h), (200.0, 400.0));
        assert_eq!((r.x, r.y), (100.0, 0.0));
    }

    #[test]
    fn test_letterbox_bars_wide_frame() {
        let frame = Frame::new(200, 100);
        let r = letterbox(&frame, Rect::new(10.0, 0.0, 400.0, 400.0));
        assert_eq!((r.w, r.h), (400.0, 200.0));
        assert_eq!((r.x, r.y), (10.0, 100.0));
    }
}
