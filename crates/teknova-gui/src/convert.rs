use teknova_core::geometry::Vec2;

pub fn vec_from_egui(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub fn pos_from_egui(p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

pub fn vec_to_egui(v: Vec2) -> egui::Vec2 {
    egui::vec2(v.x, v.y)
}

pub fn pos_to_egui(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}
