pub mod room_vis3d;
