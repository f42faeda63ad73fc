pub mod coord_transform;
