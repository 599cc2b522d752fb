pub mod strokes;
