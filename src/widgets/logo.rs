//! The [`KitchenLogo`] widget: the placeholder picture shown on every screen.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// The kitchen's placeholder picture.
///
/// One picture is reused for the home banner, the details form and the
/// confirmation screen. It renders centered in the area it is given and
/// falls back to the small size when the area is too small for the regular one.
///
/// # Examples
///
/// ```rust
/// use christoffels_kitchen::widgets::KitchenLogo;
///
/// # fn draw(frame: &mut ratatui::Frame) {
/// frame.render_widget(KitchenLogo::regular(), frame.area());
/// # }
/// ```
///
/// Renders:
///
/// ```text
///    _.-~~~~~-._
///  .'           '.
/// (   ~ ~ ~ ~ ~   )
///  '-.._______..-'
///      |  CK  |
///      |______|
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KitchenLogo {
    size: Size,
}

/// The size of the logo
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// One line: `-=( CK )=-`
    Small,
    /// The chef's hat (6 lines)
    #[default]
    Regular,
}

impl KitchenLogo {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    pub const fn small() -> Self {
        Self::new(Size::Small)
    }

    pub const fn regular() -> Self {
        Self::new(Size::Regular)
    }

    pub const fn width(&self) -> u16 {
        self.size.width()
    }

    pub const fn height(&self) -> u16 {
        self.size.height()
    }

    /// The size actually drawn in `area`.
    fn fitted_size(self, area: Rect) -> Size {
        match self.size {
            Size::Regular if area.width < Size::Regular.width() || area.height < Size::Regular.height() => {
                Size::Small
            }
            size => size,
        }
    }
}

impl Widget for KitchenLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.fitted_size(area);
        let target = crate::utils::center_rect(area, size.width(), size.height());
        Text::raw(size.as_str())
            .style(theme().title_style())
            .render(target, buf);
    }
}

impl Size {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "-=( CK )=-",
            Self::Regular => indoc! {"
                   _.-~~~~~-._
                 .'           '.
                (   ~ ~ ~ ~ ~   )
                 '-.._______..-'
                     |  CK  |
                     |______|"},
        }
    }

    /// Width in terminal cells
    pub const fn width(self) -> u16 {
        match self {
            Self::Small => 10,
            Self::Regular => 17,
        }
    }

    /// Height in lines
    pub const fn height(self) -> u16 {
        match self {
            Self::Small => 1,
            Self::Regular => 6,
        }
    }
}
