//! Token parsing and the concern-group precedence table used by
//! [`MergePolicy::ConcernGroups`](crate::MergePolicy::ConcernGroups).
//!
//! A utility token such as `md:hover:!-translate-x-1/2` is split into its variant modifiers
//! (`md`, `hover`), an important marker, a negative marker, and the base utility
//! (`translate-x-1/2`). The base utility is classified into a [`ClassGroup`]; two tokens conflict
//! when they share the group, the normalized modifier chain, and the important marker.
//!
//! The table is deliberately explicit. Tokens it does not recognize are never merged with anything
//! except exact duplicates of themselves.

/// Styling concern governed by a utility token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ClassGroup {
    Display,
    Position,
    Visibility,
    ScreenReader,
    Isolation,
    TableBorder,
    FlexDirection,
    FlexWrap,
    Flex,
    FlexGrow,
    FlexShrink,
    FlexBasis,
    Order,
    GridCols,
    GridRows,
    ColSpan,
    RowSpan,
    AlignItems,
    AlignSelf,
    AlignContent,
    JustifyContent,
    JustifyItems,
    JustifySelf,
    PlaceContent,
    PlaceItems,
    PlaceSelf,
    Gap,
    GapX,
    GapY,
    SpaceX,
    SpaceY,
    P,
    Px,
    Py,
    Pt,
    Pr,
    Pb,
    Pl,
    Ps,
    Pe,
    M,
    Mx,
    My,
    Mt,
    Mr,
    Mb,
    Ml,
    Ms,
    Me,
    Size,
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,
    FontSize,
    FontWeight,
    FontFamily,
    FontStyle,
    FontSmoothing,
    LineHeight,
    LetterSpacing,
    TextAlign,
    TextColor,
    TextDecoration,
    TextTransform,
    TextOverflow,
    Whitespace,
    WordBreak,
    Content,
    BgColor,
    BgImage,
    BgClip,
    BgSize,
    BgPosition,
    BgRepeat,
    BgAttachment,
    GradientFrom,
    GradientVia,
    GradientTo,
    BorderWidth,
    BorderWidthX,
    BorderWidthY,
    BorderWidthT,
    BorderWidthR,
    BorderWidthB,
    BorderWidthL,
    BorderStyle,
    BorderColor,
    BorderColorX,
    BorderColorY,
    BorderColorT,
    BorderColorR,
    BorderColorB,
    BorderColorL,
    Rounded,
    RoundedT,
    RoundedR,
    RoundedB,
    RoundedL,
    RoundedTl,
    RoundedTr,
    RoundedBr,
    RoundedBl,
    RingWidth,
    RingInset,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    OutlineStyle,
    OutlineWidth,
    OutlineColor,
    OutlineOffset,
    Shadow,
    ShadowColor,
    Opacity,
    Overflow,
    OverflowX,
    OverflowY,
    Transition,
    Duration,
    Ease,
    Delay,
    Animate,
    Transform,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    TranslateX,
    TranslateY,
    Inset,
    InsetX,
    InsetY,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,
    Cursor,
    PointerEvents,
    UserSelect,
    BackdropBlur,
    Blur,
    Brightness,
    Fill,
    Stroke,
    StrokeWidth,
}

impl ClassGroup {
    /// Longhand groups overridden when a later token of `self` is kept.
    pub(crate) fn overrides(self) -> &'static [ClassGroup] {
        use ClassGroup::*;
        match self {
            P => &[Px, Py, Pt, Pr, Pb, Pl, Ps, Pe],
            Px => &[Pr, Pl],
            Py => &[Pt, Pb],
            M => &[Mx, My, Mt, Mr, Mb, Ml, Ms, Me],
            Mx => &[Mr, Ml],
            My => &[Mt, Mb],
            Gap => &[GapX, GapY],
            Size => &[Width, Height],
            Inset => &[InsetX, InsetY, Top, Right, Bottom, Left],
            InsetX => &[Right, Left],
            InsetY => &[Top, Bottom],
            Rounded => &[
                RoundedT, RoundedR, RoundedB, RoundedL, RoundedTl, RoundedTr, RoundedBr, RoundedBl,
            ],
            RoundedT => &[RoundedTl, RoundedTr],
            RoundedR => &[RoundedTr, RoundedBr],
            RoundedB => &[RoundedBr, RoundedBl],
            RoundedL => &[RoundedTl, RoundedBl],
            BorderWidth => &[
                BorderWidthX,
                BorderWidthY,
                BorderWidthT,
                BorderWidthR,
                BorderWidthB,
                BorderWidthL,
            ],
            BorderWidthX => &[BorderWidthR, BorderWidthL],
            BorderWidthY => &[BorderWidthT, BorderWidthB],
            BorderColor => &[
                BorderColorX,
                BorderColorY,
                BorderColorT,
                BorderColorR,
                BorderColorB,
                BorderColorL,
            ],
            BorderColorX => &[BorderColorR, BorderColorL],
            BorderColorY => &[BorderColorT, BorderColorB],
            Overflow => &[OverflowX, OverflowY],
            Scale => &[ScaleX, ScaleY],
            _ => &[],
        }
    }
}

/// Key under which a kept token claims its concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ConflictKey {
    Group {
        modifiers: String,
        important: bool,
        group: ClassGroup,
    },
    ArbitraryProperty {
        modifiers: String,
        important: bool,
        property: String,
    },
    Exact(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classification<'t> {
    Known(ClassGroup),
    ArbitraryProperty(&'t str),
    Unknown,
}

/// A utility token split into the parts that matter for conflict resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedToken<'t> {
    modifiers: String,
    important: bool,
    classification: Classification<'t>,
    raw: &'t str,
}

impl<'t> ParsedToken<'t> {
    pub(crate) fn parse(raw: &'t str) -> Self {
        let (mut important, rest) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (modifiers, mut base) = split_modifiers(rest);
        if let Some(stripped) = base.strip_prefix('!') {
            important = true;
            base = stripped;
        }
        if let Some(stripped) = base.strip_suffix('!') {
            important = true;
            base = stripped;
        }
        let base = base.strip_prefix('-').unwrap_or(base);

        let classification = if let Some(property) = arbitrary_property(base) {
            Classification::ArbitraryProperty(property)
        } else {
            classify(base)
                .map(Classification::Known)
                .unwrap_or(Classification::Unknown)
        };

        Self {
            modifiers: normalize_modifiers(&modifiers),
            important,
            classification,
            raw,
        }
    }

    /// Key that identifies the concern this token governs.
    pub(crate) fn conflict_key(&self) -> ConflictKey {
        match self.classification {
            Classification::Known(group) => self.group_key(group),
            Classification::ArbitraryProperty(property) => ConflictKey::ArbitraryProperty {
                modifiers: self.modifiers.clone(),
                important: self.important,
                property: property.to_string(),
            },
            Classification::Unknown => ConflictKey::Exact(self.raw.to_string()),
        }
    }

    /// Every key claimed once this token is kept: its own concern plus overridden longhands.
    pub(crate) fn claims(&self) -> Vec<ConflictKey> {
        let mut claims = vec![self.conflict_key()];
        if let Classification::Known(group) = self.classification {
            claims.extend(group.overrides().iter().map(|&longhand| self.group_key(longhand)));
        }
        claims
    }

    fn group_key(&self, group: ClassGroup) -> ConflictKey {
        ConflictKey::Group {
            modifiers: self.modifiers.clone(),
            important: self.important,
            group,
        }
    }

    #[cfg(test)]
    fn group(&self) -> Option<ClassGroup> {
        match self.classification {
            Classification::Known(group) => Some(group),
            _ => None,
        }
    }
}

/// Splits `md:hover:bg-red-500` into `["md", "hover"]` and `bg-red-500`, ignoring separators
/// nested inside `[...]` or `(...)`.
fn split_modifiers(token: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&token[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    (modifiers, &token[start..])
}

/// Sorts runs of ordinary modifiers so `hover:focus:` and `focus:hover:` share a key. Arbitrary
/// variants keep their position because their order changes the selector.
fn normalize_modifiers(modifiers: &[&str]) -> String {
    let mut normalized: Vec<&str> = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&str> = Vec::new();
    for &modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            normalized.append(&mut run);
            normalized.push(modifier);
        } else {
            run.push(modifier);
        }
    }
    run.sort_unstable();
    normalized.append(&mut run);
    normalized.join(":")
}

/// `[mask-type:luminance]` yields `mask-type`.
fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    let valid = !property.is_empty()
        && !value.is_empty()
        && property
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch == '-');
    valid.then_some(property)
}

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];
const COLOR_KEYWORDS: &[&str] = &["black", "white", "transparent", "current", "inherit"];

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

/// Arbitrary values whose first character reads as a length (`[14px]`, `[0.5rem]`).
fn is_arbitrary_length(value: &str) -> bool {
    is_arbitrary(value)
        && value[1..]
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_digit() || ch == '.')
}

fn is_arbitrary_color(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    ["#", "rgb", "hsl", "color:", "var(--color"]
        .iter()
        .any(|prefix| inner.starts_with(prefix))
}

/// Palette colors (`lime-500/30`) and color keywords; custom theme tokens are not recognized.
fn is_palette_color(value: &str) -> bool {
    let head = value
        .split(|ch| ch == '-' || ch == '/')
        .next()
        .unwrap_or(value);
    PALETTE.contains(&head) || COLOR_KEYWORDS.contains(&head) || is_arbitrary_color(value)
}

fn is_width_value(value: &str) -> bool {
    is_number(value) || is_arbitrary_length(value)
}

/// Matches `side` exactly or as `side-<value>`, returning the value (empty when bare).
fn side_value<'v>(value: &'v str, side: &str) -> Option<&'v str> {
    if value == side {
        return Some("");
    }
    value.strip_prefix(side)?.strip_prefix('-')
}

fn exact(utility: &str) -> Option<ClassGroup> {
    use ClassGroup::*;
    let group = match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "table" | "inline-table"
        | "table-row" | "table-cell" | "flow-root" | "grid" | "inline-grid" | "contents"
        | "list-item" | "hidden" => Display,
        "static" | "fixed" | "absolute" | "relative" | "sticky" => Position,
        "visible" | "invisible" | "collapse" => Visibility,
        "sr-only" | "not-sr-only" => ScreenReader,
        "isolate" | "isolation-auto" => Isolation,
        "border-collapse" | "border-separate" => TableBorder,
        "italic" | "not-italic" => FontStyle,
        "antialiased" | "subpixel-antialiased" => FontSmoothing,
        "underline" | "overline" | "line-through" | "no-underline" => TextDecoration,
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => TextTransform,
        "truncate" | "text-ellipsis" | "text-clip" => TextOverflow,
        "transform" | "transform-gpu" | "transform-cpu" | "transform-none" => Transform,
        "transition" => Transition,
        "shadow" => Shadow,
        "border" => BorderWidth,
        "rounded" => Rounded,
        "ring" => RingWidth,
        "ring-inset" => RingInset,
        "outline" => OutlineStyle,
        "grow" | "flex-grow" => FlexGrow,
        "shrink" | "flex-shrink" => FlexShrink,
        "backdrop-blur" => BackdropBlur,
        "blur" => Blur,
        _ => return None,
    };
    Some(group)
}

/// Classifies a base utility (modifiers, important and negative markers already removed).
pub(crate) fn classify(utility: &str) -> Option<ClassGroup> {
    use ClassGroup::*;

    if let Some(group) = exact(utility) {
        return Some(group);
    }

    let prefixed: &[(&str, ClassGroup)] = &[
        ("gap-x-", GapX),
        ("gap-y-", GapY),
        ("gap-", Gap),
        ("space-x-", SpaceX),
        ("space-y-", SpaceY),
        ("px-", Px),
        ("py-", Py),
        ("pt-", Pt),
        ("pr-", Pr),
        ("pb-", Pb),
        ("pl-", Pl),
        ("ps-", Ps),
        ("pe-", Pe),
        ("p-", P),
        ("mx-", Mx),
        ("my-", My),
        ("mt-", Mt),
        ("mr-", Mr),
        ("mb-", Mb),
        ("ml-", Ml),
        ("ms-", Ms),
        ("me-", Me),
        ("m-", M),
        ("size-", Size),
        ("min-w-", MinWidth),
        ("max-w-", MaxWidth),
        ("w-", Width),
        ("min-h-", MinHeight),
        ("max-h-", MaxHeight),
        ("h-", Height),
        ("leading-", LineHeight),
        ("tracking-", LetterSpacing),
        ("whitespace-", Whitespace),
        ("break-", WordBreak),
        ("bg-clip-", BgClip),
        ("from-", GradientFrom),
        ("via-", GradientVia),
        ("to-", GradientTo),
        ("items-", AlignItems),
        ("self-", AlignSelf),
        ("justify-items-", JustifyItems),
        ("justify-self-", JustifySelf),
        ("justify-", JustifyContent),
        ("place-content-", PlaceContent),
        ("place-items-", PlaceItems),
        ("place-self-", PlaceSelf),
        ("flex-shrink-", FlexShrink),
        ("flex-grow-", FlexGrow),
        ("shrink-", FlexShrink),
        ("grow-", FlexGrow),
        ("basis-", FlexBasis),
        ("order-", Order),
        ("grid-cols-", GridCols),
        ("grid-rows-", GridRows),
        ("col-span-", ColSpan),
        ("row-span-", RowSpan),
        ("overflow-x-", OverflowX),
        ("overflow-y-", OverflowY),
        ("overflow-", Overflow),
        ("opacity-", Opacity),
        ("z-", ZIndex),
        ("cursor-", Cursor),
        ("pointer-events-", PointerEvents),
        ("select-", UserSelect),
        ("inset-x-", InsetX),
        ("inset-y-", InsetY),
        ("inset-", Inset),
        ("top-", Top),
        ("right-", Right),
        ("bottom-", Bottom),
        ("left-", Left),
        ("translate-x-", TranslateX),
        ("translate-y-", TranslateY),
        ("scale-x-", ScaleX),
        ("scale-y-", ScaleY),
        ("scale-", Scale),
        ("rotate-", Rotate),
        ("transition-", Transition),
        ("duration-", Duration),
        ("ease-", Ease),
        ("delay-", Delay),
        ("animate-", Animate),
        ("backdrop-blur-", BackdropBlur),
        ("blur-", Blur),
        ("brightness-", Brightness),
        ("fill-", Fill),
    ];
    for (prefix, group) in prefixed {
        if utility.len() > prefix.len() && utility.starts_with(prefix) {
            return Some(*group);
        }
    }

    if let Some(value) = utility.strip_prefix("flex-") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => FlexDirection,
            "wrap" | "wrap-reverse" | "nowrap" => FlexWrap,
            _ => Flex,
        });
    }
    if let Some(value) = utility.strip_prefix("content-") {
        return Some(match value {
            "normal" | "center" | "start" | "end" | "between" | "around" | "evenly"
            | "baseline" | "stretch" => AlignContent,
            _ => Content,
        });
    }
    if let Some(value) = utility.strip_prefix("text-") {
        return Some(classify_text(value));
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) || is_number(value) {
            FontWeight
        } else {
            FontFamily
        });
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return Some(classify_background(value));
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return Some(classify_border(value));
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        return Some(classify_rounded(value));
    }
    if let Some(value) = utility.strip_prefix("ring-offset-") {
        return Some(if is_width_value(value) {
            RingOffsetWidth
        } else {
            RingOffsetColor
        });
    }
    if let Some(value) = utility.strip_prefix("ring-") {
        return Some(if is_width_value(value) {
            RingWidth
        } else {
            RingColor
        });
    }
    if let Some(value) = utility.strip_prefix("outline-offset-") {
        return (!value.is_empty()).then_some(OutlineOffset);
    }
    if let Some(value) = utility.strip_prefix("outline-") {
        return Some(if LINE_STYLES.contains(&value) {
            OutlineStyle
        } else if is_width_value(value) {
            OutlineWidth
        } else {
            OutlineColor
        });
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        return Some(classify_shadow(value));
    }
    if let Some(value) = utility.strip_prefix("stroke-") {
        return Some(if is_width_value(value) {
            StrokeWidth
        } else {
            Stroke
        });
    }

    None
}

fn classify_text(value: &str) -> ClassGroup {
    use ClassGroup::*;
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => TextAlign,
        "ellipsis" | "clip" => TextOverflow,
        _ if TEXT_SIZES.contains(&value) || is_arbitrary_length(value) => FontSize,
        _ => TextColor,
    }
}

fn classify_background(value: &str) -> ClassGroup {
    use ClassGroup::*;
    match value {
        "none" => BgImage,
        "auto" | "cover" | "contain" => BgSize,
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => BgPosition,
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            BgRepeat
        }
        "fixed" | "local" | "scroll" => BgAttachment,
        _ if value.starts_with("gradient-")
            || value.starts_with("[url(")
            || value.starts_with("[linear-gradient") =>
        {
            BgImage
        }
        _ => BgColor,
    }
}

fn classify_border(value: &str) -> ClassGroup {
    use ClassGroup::*;
    if LINE_STYLES.contains(&value) {
        return BorderStyle;
    }
    if is_width_value(value) {
        return BorderWidth;
    }
    let sides: [(&str, ClassGroup, ClassGroup); 6] = [
        ("x", BorderWidthX, BorderColorX),
        ("y", BorderWidthY, BorderColorY),
        ("t", BorderWidthT, BorderColorT),
        ("r", BorderWidthR, BorderColorR),
        ("b", BorderWidthB, BorderColorB),
        ("l", BorderWidthL, BorderColorL),
    ];
    for (side, width, color) in sides {
        if let Some(rest) = side_value(value, side) {
            return if rest.is_empty() || is_width_value(rest) {
                width
            } else {
                color
            };
        }
    }
    BorderColor
}

fn classify_rounded(value: &str) -> ClassGroup {
    use ClassGroup::*;
    let corners: [(&str, ClassGroup); 8] = [
        ("tl", RoundedTl),
        ("tr", RoundedTr),
        ("br", RoundedBr),
        ("bl", RoundedBl),
        ("t", RoundedT),
        ("r", RoundedR),
        ("b", RoundedB),
        ("l", RoundedL),
    ];
    corners
        .into_iter()
        .find(|(corner, _)| side_value(value, corner).is_some())
        .map(|(_, group)| group)
        .unwrap_or(Rounded)
}

fn classify_shadow(value: &str) -> ClassGroup {
    use ClassGroup::*;
    if SHADOW_SIZES.contains(&value) {
        Shadow
    } else if is_palette_color(value) {
        ShadowColor
    } else {
        Shadow
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn group_of(token: &str) -> Option<ClassGroup> {
        ParsedToken::parse(token).group()
    }

    #[test]
    fn text_utilities_split_into_size_alignment_and_color() {
        assert_eq!(group_of("text-base"), Some(ClassGroup::FontSize));
        assert_eq!(group_of("text-[14px]"), Some(ClassGroup::FontSize));
        assert_eq!(group_of("text-center"), Some(ClassGroup::TextAlign));
        assert_eq!(group_of("text-zinc-900"), Some(ClassGroup::TextColor));
        assert_eq!(group_of("text-text-zinc-200"), Some(ClassGroup::TextColor));
    }

    #[test]
    fn border_utilities_distinguish_width_style_color_and_sides() {
        assert_eq!(group_of("border"), Some(ClassGroup::BorderWidth));
        assert_eq!(group_of("border-2"), Some(ClassGroup::BorderWidth));
        assert_eq!(group_of("border-dashed"), Some(ClassGroup::BorderStyle));
        assert_eq!(group_of("border-lime-400"), Some(ClassGroup::BorderColor));
        assert_eq!(group_of("border-red-500/50"), Some(ClassGroup::BorderColor));
        assert_eq!(group_of("border-border-soft"), Some(ClassGroup::BorderColor));
        assert_eq!(group_of("border-t"), Some(ClassGroup::BorderWidthT));
        assert_eq!(group_of("border-x-4"), Some(ClassGroup::BorderWidthX));
        assert_eq!(group_of("border-t-current"), Some(ClassGroup::BorderColorT));
    }

    #[test]
    fn background_utilities_distinguish_color_image_and_clip() {
        assert_eq!(group_of("bg-zinc-800-alpha-50"), Some(ClassGroup::BgColor));
        assert_eq!(group_of("bg-gradient-to-r"), Some(ClassGroup::BgImage));
        assert_eq!(group_of("bg-gradient-accent-top"), Some(ClassGroup::BgImage));
        assert_eq!(group_of("bg-clip-text"), Some(ClassGroup::BgClip));
        assert_eq!(group_of("bg-cover"), Some(ClassGroup::BgSize));
    }

    #[test]
    fn ring_outline_and_shadow_split_width_from_color() {
        assert_eq!(group_of("ring-2"), Some(ClassGroup::RingWidth));
        assert_eq!(group_of("ring-focus-ring"), Some(ClassGroup::RingColor));
        assert_eq!(group_of("ring-offset-2"), Some(ClassGroup::RingOffsetWidth));
        assert_eq!(group_of("ring-offset-surface"), Some(ClassGroup::RingOffsetColor));
        assert_eq!(group_of("outline-none"), Some(ClassGroup::OutlineStyle));
        assert_eq!(group_of("outline-2"), Some(ClassGroup::OutlineWidth));
        assert_eq!(group_of("outline-blue-500"), Some(ClassGroup::OutlineColor));
        assert_eq!(group_of("shadow-ds-soft"), Some(ClassGroup::Shadow));
        assert_eq!(
            group_of("shadow-[0_0_20px_hsl(var(--glow))]"),
            Some(ClassGroup::Shadow)
        );
        assert_eq!(group_of("shadow-lime-500/30"), Some(ClassGroup::ShadowColor));
    }

    #[test]
    fn flex_family_is_split_by_concern() {
        assert_eq!(group_of("flex"), Some(ClassGroup::Display));
        assert_eq!(group_of("flex-col"), Some(ClassGroup::FlexDirection));
        assert_eq!(group_of("flex-wrap"), Some(ClassGroup::FlexWrap));
        assert_eq!(group_of("flex-1"), Some(ClassGroup::Flex));
        assert_eq!(group_of("flex-shrink-0"), Some(ClassGroup::FlexShrink));
        assert_eq!(group_of("shrink-0"), Some(ClassGroup::FlexShrink));
    }

    #[test]
    fn content_distinguishes_alignment_from_generated_content() {
        assert_eq!(group_of("content-center"), Some(ClassGroup::AlignContent));
        assert_eq!(group_of("before:content-[\"\"]"), Some(ClassGroup::Content));
    }

    #[test]
    fn modifiers_are_split_outside_brackets() {
        let (modifiers, base) = split_modifiers("[&>span[aria-hidden=\"true\"]_svg]:stroke-accent");
        assert_eq!(modifiers, vec!["[&>span[aria-hidden=\"true\"]_svg]"]);
        assert_eq!(base, "stroke-accent");

        let (modifiers, base) = split_modifiers("data-[invalid]:focus-visible:ring-destructive");
        assert_eq!(modifiers, vec!["data-[invalid]", "focus-visible"]);
        assert_eq!(base, "ring-destructive");
    }

    #[test]
    fn ordinary_modifier_order_does_not_change_the_conflict_key() {
        assert_eq!(
            ParsedToken::parse("hover:focus:bg-red-500").conflict_key(),
            ParsedToken::parse("focus:hover:bg-blue-500").conflict_key()
        );
        assert_ne!(
            ParsedToken::parse("[&>svg]:hover:fill-red-500").conflict_key(),
            ParsedToken::parse("hover:[&>svg]:fill-red-500").conflict_key()
        );
    }

    #[test]
    fn important_and_negative_markers_are_recognized() {
        let important = ParsedToken::parse("!p-4");
        assert!(important.important);
        assert_eq!(important.group(), Some(ClassGroup::P));

        let trailing = ParsedToken::parse("md:p-4!");
        assert!(trailing.important);

        assert_eq!(group_of("-translate-x-1/2"), Some(ClassGroup::TranslateX));
        assert_ne!(
            ParsedToken::parse("!p-4").conflict_key(),
            ParsedToken::parse("p-4").conflict_key()
        );
    }

    #[test]
    fn arbitrary_properties_are_keyed_by_property_name() {
        assert_eq!(
            ParsedToken::parse("[mask-type:luminance]").conflict_key(),
            ParsedToken::parse("[mask-type:alpha]").conflict_key()
        );
        assert_ne!(
            ParsedToken::parse("[mask-type:luminance]").conflict_key(),
            ParsedToken::parse("[scroll-snap-type:x]").conflict_key()
        );
    }

    #[test]
    fn unknown_tokens_are_keyed_by_their_exact_text() {
        assert_eq!(group_of("terminal-header"), None);
        assert_eq!(
            ParsedToken::parse("terminal-header").conflict_key(),
            ConflictKey::Exact("terminal-header".to_string())
        );
    }

    #[test]
    fn shorthands_claim_their_longhands() {
        let claims = ParsedToken::parse("p-4").claims();
        assert!(claims.contains(&ParsedToken::parse("px-2").conflict_key()));
        assert!(claims.contains(&ParsedToken::parse("pt-1").conflict_key()));

        let claims = ParsedToken::parse("px-2").claims();
        assert!(!claims.contains(&ParsedToken::parse("p-4").conflict_key()));
    }
}
