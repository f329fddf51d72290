//! Display Options: theme mode, accent, wallpaper and tint controls.

use leptos::*;
use system_ui::{
    Button, ButtonSize, ButtonVariant, Card, Cluster, ColorField, Grid, Heading, LayoutGap,
    LayoutJustify, LayoutPadding, Stack, Switch, Text, TextRole, TextTone,
};

use crate::{
    runtime_context::use_desktop_runtime,
    theme::{wallpapers_for_mode, ThemeAction, ThemeMode, ACCENT_PRESETS, WALLPAPERS},
};

#[component]
pub(super) fn DisplayOptionsApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let theme = runtime.theme;
    let dispatch = move |action: ThemeAction| runtime.dispatch_theme_action(action);

    let is_dark = Signal::derive(move || theme.get().mode == ThemeMode::Dark);
    let tint = Signal::derive(move || theme.get().wallpaper_tint.unwrap_or_default());

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading>"Display Options"</Heading>

            <Card>
                <Cluster justify=LayoutJustify::Between>
                    <Stack gap=LayoutGap::None>
                        <Text role=TextRole::Label>"Dark mode"</Text>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            "Switching modes also selects that mode's default wallpaper."
                        </Text>
                    </Stack>
                    <Switch
                        aria_label="Dark mode"
                        checked=is_dark
                        on_toggle=Callback::new(move |dark: bool| {
                            let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
                            dispatch(ThemeAction::SetMode(mode));
                        })
                    />
                </Cluster>
            </Card>

            <Card>
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Label>"Accent color"</Text>
                    <Cluster gap=LayoutGap::Sm>
                        {ACCENT_PRESETS
                            .iter()
                            .map(|(name, hex)| {
                                let hex = *hex;
                                view! {
                                    <Button
                                        variant=ButtonVariant::Accent
                                        size=ButtonSize::Sm
                                        aria_label=*name
                                        title=*name
                                        style=format!("--swatch:{hex};")
                                        selected=Signal::derive(move || {
                                            theme.get().accent_color.eq_ignore_ascii_case(hex)
                                        })
                                        on_click=Callback::new(move |_| {
                                            dispatch(ThemeAction::SetAccent(hex.to_string()));
                                        })
                                    >
                                        <span data-ui-slot="swatch"></span>
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Cluster>
                </Stack>
            </Card>

            <Card>
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Label>"Wallpaper"</Text>
                    <Grid gap=LayoutGap::Sm>
                        {move || {
                            wallpapers_for_mode(theme.get().mode)
                                .map(|wallpaper| {
                                    let id = wallpaper.id;
                                    view! {
                                        <Button
                                            variant=ButtonVariant::Quiet
                                            selected=Signal::derive(move || theme.get().wallpaper_id == id)
                                            on_click=Callback::new(move |_| {
                                                dispatch(ThemeAction::SetWallpaper(id.to_string()));
                                            })
                                        >
                                            {wallpaper.name}
                                        </Button>
                                    }
                                })
                                .collect_view()
                        }}
                    </Grid>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {format!("{} wallpapers installed", WALLPAPERS.len())}
                    </Text>
                </Stack>
            </Card>

            <Card>
                <Cluster justify=LayoutJustify::Between>
                    <Text role=TextRole::Label>"Wallpaper tint"</Text>
                    <Cluster gap=LayoutGap::Sm>
                        <ColorField
                            aria_label="Wallpaper tint"
                            value=tint
                            on_input=Callback::new(move |ev: web_sys::Event| {
                                dispatch(ThemeAction::SetWallpaperTint(Some(event_target_value(&ev))));
                            })
                        />
                        <Button
                            size=ButtonSize::Sm
                            disabled=Signal::derive(move || theme.get().wallpaper_tint.is_none())
                            on_click=Callback::new(move |_| dispatch(ThemeAction::SetWallpaperTint(None)))
                        >
                            "Clear"
                        </Button>
                    </Cluster>
                </Cluster>
            </Card>

            <Cluster justify=LayoutJustify::End>
                <Button on_click=Callback::new(move |_| dispatch(ThemeAction::Reset))>
                    "Reset to defaults"
                </Button>
            </Cluster>
        </Stack>
    }
}
