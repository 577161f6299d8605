// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget shielding photo surfaces from unwanted pointer input.
//!
//! Two concerns, both best-effort deterrents rather than any kind of
//! security boundary:
//!
//! - Secondary-button presses over wrapped photos are swallowed so nothing
//!   downstream can offer a copy/save affordance.
//! - Optionally, wheel events are swallowed before they reach an inner
//!   scrollable, reserving the wheel for zoom while the lightbox is open.
//!
//! All other events pass straight through to the wrapped content.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Wraps content and filters the shielded events away from it.
pub struct PhotoShield<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    block_wheel: bool,
}

impl<'a, Message, Theme, Renderer> PhotoShield<'a, Message, Theme, Renderer> {
    /// Creates a shield that swallows secondary-button presses only.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            block_wheel: false,
        }
    }

    /// Also swallow wheel events (lightbox stage: wheel belongs to zoom).
    #[must_use]
    pub fn block_wheel(mut self) -> Self {
        self.block_wheel = true;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for PhotoShield<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if is_shielded_event(event, self.block_wheel) {
            // Captured, not just dropped: layers underneath (the page
            // scrollable behind the lightbox) must not see it either.
            shell.capture_event();
            return;
        }

        // Pass through all other events
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<PhotoShield<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(shield: PhotoShield<'a, Message, Theme, Renderer>) -> Self {
        Self::new(shield)
    }
}

/// Shield for a grid or carousel photo: swallows secondary presses only.
pub fn photo_shield<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> PhotoShield<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    PhotoShield::new(content)
}

fn is_shielded_event(event: &Event, block_wheel: bool) -> bool {
    match event {
        Event::Mouse(
            mouse::Event::ButtonPressed(mouse::Button::Right)
            | mouse::Event::ButtonReleased(mouse::Button::Right),
        ) => true,
        Event::Mouse(mouse::Event::WheelScrolled { .. }) => block_wheel,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel_event() -> Event {
        Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        })
    }

    #[test]
    fn right_press_is_always_shielded() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert!(is_shielded_event(&event, false));
        assert!(is_shielded_event(&event, true));
    }

    #[test]
    fn wheel_is_shielded_only_when_requested() {
        assert!(!is_shielded_event(&wheel_event(), false));
        assert!(is_shielded_event(&wheel_event(), true));
    }

    #[test]
    fn primary_clicks_pass_through() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(!is_shielded_event(&event, true));
    }

    #[test]
    fn window_events_pass_through() {
        let event = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(!is_shielded_event(&event, true));
    }
}
