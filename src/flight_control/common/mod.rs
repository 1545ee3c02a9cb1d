mod quaternion;
mod vec3d;

pub use quaternion::Quaternion;
pub use vec3d::Vec3D;
