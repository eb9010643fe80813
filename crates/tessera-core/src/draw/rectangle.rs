//! Fluent builder over a single SVG `rect` node.

use std::fmt::Display;

use crate::{
    geometry::{Point, Rotation, SvgNumber},
    scene::{SVG_NAMESPACE, SceneFactory, SceneNode},
};

/// Fill used when no color is given at construction.
pub const DEFAULT_FILL: &str = "#F76902";

/// Initial geometry and style for a [`RectangleShape`].
///
/// Height and width are required; position defaults to the origin, the fill
/// to [`DEFAULT_FILL`] and opacity to `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleAttributes {
    height: f32,
    width: f32,
    position: Point,
    color: String,
    opacity: f32,
}

impl RectangleAttributes {
    pub fn new(height: f32, width: f32) -> Self {
        Self {
            height,
            width,
            position: Point::default(),
            color: DEFAULT_FILL.to_string(),
            opacity: 1.0,
        }
    }

    /// Sets the top-left corner (builder style).
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Sets the fill (builder style). The value is kept as text and not parsed.
    pub fn with_color(mut self, color: impl Display) -> Self {
        self.color = color.to_string();
        self
    }

    /// Sets the opacity (builder style).
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// A rectangle that owns one retained `rect` node.
///
/// Each setter writes its value to the node immediately and returns the
/// same shape, so calls can be chained. Values are forwarded verbatim:
/// negative sizes, opacities outside `[0, 1]` and unparseable colors are
/// accepted and left for the renderer to deal with. The node is the only
/// state; read attributes back through [`element`](Self::element).
///
/// # Examples
///
/// ```
/// use tessera_core::{
///     draw::RectangleShape,
///     scene::{SceneNode, SvgScene},
/// };
///
/// let scene = SvgScene::new();
/// let mut tile = RectangleShape::new(&scene, 10.0, 5.0);
/// tile.set_pos(20.0, 40.0).set_color("black").rotate(45.0, 10.0, 10.0);
///
/// let rect = tile.element();
/// assert_eq!(rect.attribute("x").as_deref(), Some("20"));
/// assert_eq!(rect.attribute("fill").as_deref(), Some("black"));
/// assert_eq!(rect.attribute("transform").as_deref(), Some("rotate(45 10 10)"));
/// ```
#[derive(Debug)]
pub struct RectangleShape<N: SceneNode> {
    element: N,
}

impl<N: SceneNode> RectangleShape<N> {
    /// Creates a rectangle at the origin with the default fill and full opacity.
    pub fn new<F>(scene: &F, height: f32, width: f32) -> Self
    where
        F: SceneFactory<Node = N>,
    {
        Self::from_attributes(scene, &RectangleAttributes::new(height, width))
    }

    /// Creates the `rect` node and applies height, width, position, color
    /// and opacity, in that order.
    pub fn from_attributes<F>(scene: &F, attributes: &RectangleAttributes) -> Self
    where
        F: SceneFactory<Node = N>,
    {
        let mut shape = Self {
            element: scene.create_element(SVG_NAMESPACE, "rect"),
        };
        let position = attributes.position();
        shape
            .set_height(attributes.height())
            .set_width(attributes.width())
            .set_pos(position.x(), position.y())
            .set_color(attributes.color())
            .set_opacity(attributes.opacity());
        shape
    }

    /// Borrows the owned node so a container can attach it to a scene.
    pub fn element(&self) -> &N {
        &self.element
    }

    /// Gives up the shape and returns its node.
    pub fn into_element(self) -> N {
        self.element
    }

    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.write("width", SvgNumber(width))
    }

    pub fn set_height(&mut self, height: f32) -> &mut Self {
        self.write("height", SvgNumber(height))
    }

    /// Moves the top-left corner to `(x, y)`.
    pub fn set_pos(&mut self, x: f32, y: f32) -> &mut Self {
        self.write("x", SvgNumber(x)).write("y", SvgNumber(y))
    }

    pub fn set_color(&mut self, color: impl Display) -> &mut Self {
        self.write("fill", color)
    }

    pub fn set_opacity(&mut self, opacity: f32) -> &mut Self {
        self.write("opacity", SvgNumber(opacity))
    }

    /// Replaces the transform with a rotation of `degrees` about `(pivot_x, pivot_y)`.
    ///
    /// Rotations do not compose: the last call wins.
    pub fn rotate(&mut self, degrees: f32, pivot_x: f32, pivot_y: f32) -> &mut Self {
        let rotation = Rotation::new(degrees, Point::new(pivot_x, pivot_y));
        self.write("transform", rotation)
    }

    fn write(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.element.set_attribute(name, &value.to_string());
        self
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::scene::SvgScene;

    // ===================
    // Strategies
    // ===================

    fn scalar_strategy() -> impl Strategy<Value = f32> {
        -10_000.0f32..10_000.0
    }

    fn color_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "#[0-9a-fA-F]{6}",
            Just("red".to_string()),
            Just("rgb(1, 2, 3)".to_string()),
            "[a-z ]{0,12}",
        ]
    }

    fn read_number<N: SceneNode>(shape: &RectangleShape<N>, name: &str) -> f32 {
        shape
            .element()
            .attribute(name)
            .and_then(|value| value.parse().ok())
            .unwrap_or(f32::NAN)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every constructor argument can be read back from the node unchanged.
    fn check_construction_reads_back(
        height: f32,
        width: f32,
        x: f32,
        y: f32,
        color: String,
        opacity: f32,
    ) -> Result<(), TestCaseError> {
        let attributes = RectangleAttributes::new(height, width)
            .with_position(x, y)
            .with_color(&color)
            .with_opacity(opacity);
        let shape = RectangleShape::from_attributes(&SvgScene::new(), &attributes);

        prop_assert!(approx_eq!(f32, read_number(&shape, "height"), height));
        prop_assert!(approx_eq!(f32, read_number(&shape, "width"), width));
        prop_assert!(approx_eq!(f32, read_number(&shape, "x"), x));
        prop_assert!(approx_eq!(f32, read_number(&shape, "y"), y));
        prop_assert!(approx_eq!(f32, read_number(&shape, "opacity"), opacity));
        prop_assert_eq!(shape.element().attribute("fill"), Some(color));
        Ok(())
    }

    /// `set_pos` leaves exactly the given coordinates regardless of the prior position.
    fn check_set_pos_overwrites(
        before: (f32, f32),
        after: (f32, f32),
    ) -> Result<(), TestCaseError> {
        let mut shape = RectangleShape::new(&SvgScene::new(), 1.0, 1.0);
        shape.set_pos(before.0, before.1).set_pos(after.0, after.1);

        prop_assert!(approx_eq!(f32, read_number(&shape, "x"), after.0));
        prop_assert!(approx_eq!(f32, read_number(&shape, "y"), after.1));
        Ok(())
    }

    /// Only the last rotation is visible on the node.
    fn check_rotation_last_wins(
        first: (f32, f32, f32),
        second: (f32, f32, f32),
    ) -> Result<(), TestCaseError> {
        let mut shape = RectangleShape::new(&SvgScene::new(), 1.0, 1.0);
        shape
            .rotate(first.0, first.1, first.2)
            .rotate(second.0, second.1, second.2);

        let expected = format!(
            "rotate({} {} {})",
            SvgNumber(second.0),
            SvgNumber(second.1),
            SvgNumber(second.2)
        );
        prop_assert_eq!(shape.element().attribute("transform"), Some(expected));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn construction_reads_back(
            height in scalar_strategy(),
            width in scalar_strategy(),
            x in scalar_strategy(),
            y in scalar_strategy(),
            color in color_strategy(),
            opacity in -1.0f32..2.0,
        ) {
            check_construction_reads_back(height, width, x, y, color, opacity)?;
        }

        #[test]
        fn set_pos_overwrites(
            before in (scalar_strategy(), scalar_strategy()),
            after in (scalar_strategy(), scalar_strategy()),
        ) {
            check_set_pos_overwrites(before, after)?;
        }

        #[test]
        fn rotation_last_wins(
            first in (scalar_strategy(), scalar_strategy(), scalar_strategy()),
            second in (scalar_strategy(), scalar_strategy(), scalar_strategy()),
        ) {
            check_rotation_last_wins(first, second)?;
        }
    }
}
