use glam::Vec2;
use web_sys as web;

/// Map a client-space point (CSS px) into canvas backing pixels, given the
/// canvas's bounding rect and backing size. Equal sizes or a collapsed rect map 1:1.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Vec2 {
    let css = client - rect_origin;
    if rect_size == canvas_size {
        css
    } else if rect_size.x > 0.0 && rect_size.y > 0.0 {
        css * canvas_size / rect_size
    } else {
        css
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
