use super::*;

#[component]
/// Shared button primitive.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_haspopup: MaybeSignal<String>,
    #[prop(optional, into)] aria_pressed: MaybeSignal<bool>,
    #[prop(optional, into)] aria_keyshortcuts: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] ui_state: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            role=role
            aria-label=move || aria_label.get()
            aria-controls=move || aria_controls.get()
            aria-expanded=move || aria_expanded.get().to_string()
            aria-haspopup=move || aria_haspopup.get()
            aria-pressed=move || aria_pressed.get().to_string()
            aria-keyshortcuts=move || aria_keyshortcuts.get()
            title=move || title.get()
            style=move || style.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                let state = ui_state.get();
                if !state.is_empty() {
                    state
                } else if selected.get() {
                    "selected".to_string()
                } else {
                    "idle".to_string()
                }
            }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Shared single-line text input.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            node_ref=node_ref
            autocomplete="off"
            spellcheck="false"
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-slot=ui_slot
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        />
    }
}

#[component]
/// Native color picker input.
pub fn ColorField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            type="color"
            aria-label=aria_label
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="color-field"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
}

#[component]
/// Toggle switch with `role="switch"` semantics.
pub fn Switch(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let toggle = move || {
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(!checked.get_untracked());
        }
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-switch", layout_class)
            role="switch"
            aria-label=move || aria_label.get()
            aria-checked=move || checked.get().to_string()
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-selected=move || bool_token(checked.get())
            on:click=move |_| toggle()
        >
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
            </span>
        </button>
    }
}
