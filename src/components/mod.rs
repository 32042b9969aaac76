//! ECS components for scene entities.
//!
//! Submodules overview:
//! - [`drift`] – constant sideways motion with wrap-around (clouds)
//! - [`fielder`] – fielder figure shown while its marker is hovered
//! - [`globaltransform3d`] – computed world transform and visibility
//! - [`group`] – tag naming the scene layer of an entity
//! - [`label`] – screen-projected position labels and leader lines
//! - [`marker`] – pulsing, hoverable fielding-position marker
//! - [`material`] – base color, shading mode and color helpers
//! - [`rotation`] – yaw angle in degrees
//! - [`scale`] – 3D scale factor
//! - [`shape`] – renderable primitive and its tessellation
//! - [`themetint`] – day/night color pair
//! - [`visibility`] – show/hide flag inherited by children
//! - [`worldposition`] – scene-space position (pivot)

pub mod drift;
pub mod fielder;
pub mod globaltransform3d;
pub mod group;
pub mod label;
pub mod marker;
pub mod material;
pub mod rotation;
pub mod scale;
pub mod shape;
pub mod themetint;
pub mod visibility;
pub mod worldposition;
