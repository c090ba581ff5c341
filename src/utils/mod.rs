pub mod image_ops;
