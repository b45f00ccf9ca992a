//! Sign in / sign up dialog. UI only: success just reports the chosen user type.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape};
use dioxus_free_icons::icons::md_action_icons::{MdLock, MdVisibility, MdVisibilityOff};
use dioxus_free_icons::icons::md_communication_icons::{MdEmail, MdPhone};
use dioxus_free_icons::icons::md_navigation_icons::MdClose;
use dioxus_free_icons::icons::md_social_icons::{MdPeople, MdPerson, MdSchool};
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use crate::data_definitions::auth_form::{AuthFormData, AuthTab, UserType};

#[derive(Clone, Copy)]
struct AuthFormContext {
    form: Signal<AuthFormData>,
    show_password: Signal<bool>,
}

#[component]
pub fn AuthModals(open: bool, on_open_change: Callback<bool>, on_auth_success: Callback<UserType>) -> Element {
    let mut active_tab = use_signal(AuthTab::default);
    let form = use_signal(AuthFormData::default);
    let show_password = use_signal(|| false);
    use_context_provider(|| AuthFormContext { form, show_password });

    let finish = move |kind: UserType| {
        on_auth_success(kind);
        on_open_change(false);
    };

    if !open {
        return rsx! {};
    }

    rsx! {
        // backdrop
        div {
            style: "
                position: fixed;
                inset: 0;
                z-index: 999;
                background-color: rgba(0,0,0,0.5);
            ",
            onclick: move |_| on_open_change(false),
        }
        div {
            role: "dialog",
            style: "
                position: fixed;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                z-index: 1000;
                width: 500px;
                max-width: calc(100vw - 32px);
                max-height: 90vh;
                overflow-y: auto;
                background: white;
                border-radius: 16px;
                padding: 24px;
                box-shadow: 0 16px 48px rgba(0,0,0,0.25);
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",
            div {
                style: "display:flex; align-items:center; justify-content: center; gap: 8px; font-size: 20px; font-weight: 600; position: relative;",
                span {
                    class: "afrolearn-gradient-sunset",
                    style: "display:flex; padding: 6px; border-radius: 12px;",
                    Icon { icon: MdSchool, style: "width: 20px; height: 20px; color: white;" }
                }
                "Join AfroLearn"
                button {
                    style: "position: absolute; right: 0; border: none; background: none; cursor: pointer;",
                    onclick: move |_| on_open_change(false),
                    Icon { icon: MdClose, style: "width: 20px; height: 20px; color: #6B7280;" }
                }
            }

            // tabs
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; background: #F3F4F6; border-radius: 10px; padding: 4px;",
                TabButton { label: "Sign In", selected: active_tab() == AuthTab::SignIn, onclick: move |_| active_tab.set(AuthTab::SignIn) }
                TabButton { label: "Sign Up", selected: active_tab() == AuthTab::SignUp, onclick: move |_| active_tab.set(AuthTab::SignUp) }
            }

            {match active_tab() {
                AuthTab::SignIn => rsx! { SignInPanel { on_success: finish } },
                AuthTab::SignUp => rsx! { SignUpPanel { on_success: finish } },
            }}
        }
    }
}

#[component]
fn TabButton(label: String, selected: bool, onclick: Callback<()>) -> Element {
    let background = if selected { "white" } else { "transparent" };
    let shadow = if selected { "0 1px 3px rgba(0,0,0,0.12)" } else { "none" };
    rsx! {
        button {
            style: "
                border: none;
                border-radius: 8px;
                padding: 8px;
                cursor: pointer;
                font-weight: 500;
                background: {background};
                box-shadow: {shadow};
            ",
            onclick: move |_| onclick(()),
            "{label}"
        }
    }
}

#[component]
fn SignInPanel(on_success: Callback<UserType>) -> Element {
    let ctx = use_context::<AuthFormContext>();
    let mut form = ctx.form;
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 14px;",
            div {
                style: "text-align: center;",
                h3 { style: "font-size: 20px; font-weight: 600;", "Welcome Back! 👋" }
                p { style: "color: #6B7280; font-size: 14px;", "Sign in to continue your learning journey" }
            }
            FormField {
                label: "Email",
                icon: MdEmail,
                input_type: "email",
                placeholder: "your@email.com",
                value: form.read().email.clone(),
                oninput: move |v: String| form.write().email = v,
            }
            PasswordField {
                label: "Password",
                placeholder: "Enter your password",
                value: form.read().password.clone(),
                oninput: move |v: String| form.write().password = v,
            }
            button {
                class: "afrolearn-button-primary afrolearn-gradient-sunset",
                style: "width: 100%; padding: 12px;",
                onclick: move |_| on_success(form.read().user_type),
                "Sign In"
            }
            SocialButtons {}
            p {
                style: "text-align: center; font-size: 14px; color: #6B7280;",
                "Forgot password? "
                span { style: "color: #EA580C; cursor: pointer;", "Reset here" }
            }
        }
    }
}

#[component]
fn SignUpPanel(on_success: Callback<UserType>) -> Element {
    let ctx = use_context::<AuthFormContext>();
    let mut form = ctx.form;
    let can_sign_up = use_memo(move || form.read().can_sign_up());
    let sign_up_label = use_memo(move || form.read().sign_up_label());
    let passwords_differ = use_memo(move || !form.read().confirm_password.is_empty() && !form.read().passwords_match());
    rsx! {
        div {
            style: "display:flex; flex-direction: column; gap: 14px;",
            h3 { style: "font-size: 18px; font-weight: 600; text-align: center;", "Choose Your Learning Path" }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                UserTypeCard { kind: UserType::Student, title: "Student", subtitle: "Learn and grow", icon: MdPerson }
                UserTypeCard { kind: UserType::Instructor, title: "Instructor", subtitle: "Teach and inspire", icon: MdPeople }
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                FormField {
                    label: "Full Name",
                    icon: MdPerson,
                    input_type: "text",
                    placeholder: "John Doe",
                    value: form.read().name.clone(),
                    oninput: move |v: String| form.write().name = v,
                }
                FormField {
                    label: "Phone Number",
                    icon: MdPhone,
                    input_type: "tel",
                    placeholder: "+234 800 000 0000",
                    value: form.read().phone.clone(),
                    oninput: move |v: String| form.write().phone = v,
                }
            }
            FormField {
                label: "Email Address",
                icon: MdEmail,
                input_type: "email",
                placeholder: "your@email.com",
                value: form.read().email.clone(),
                oninput: move |v: String| form.write().email = v,
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                PasswordField {
                    label: "Password",
                    placeholder: "Create password",
                    value: form.read().password.clone(),
                    oninput: move |v: String| form.write().password = v,
                }
                FormField {
                    label: "Confirm Password",
                    icon: MdLock,
                    input_type: "password",
                    placeholder: "Confirm password",
                    value: form.read().confirm_password.clone(),
                    oninput: move |v: String| form.write().confirm_password = v,
                }
            }
            if passwords_differ() {
                p { style: "color: #B91C1C; font-size: 13px;", "Passwords do not match" }
            }
            div {
                style: "display:flex; align-items:center; gap: 8px; cursor: pointer; font-size: 14px;",
                onclick: move |_| {
                    let accepted = form.read().accept_terms;
                    form.write().accept_terms = !accepted;
                },
                if form.read().accept_terms {
                    Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #EA580C;" }
                } else {
                    Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px;" }
                }
                "I agree to the Terms of Service and Privacy Policy"
            }
            button {
                class: "afrolearn-button-primary afrolearn-gradient-sunset",
                style: "width: 100%; padding: 12px;",
                disabled: !can_sign_up(),
                onclick: move |_| {
                    if can_sign_up() {
                        on_success(form.read().user_type);
                    }
                },
                "{sign_up_label}"
            }
            SocialButtons {}
        }
    }
}

#[component]
fn UserTypeCard<I: IconShape + Clone + PartialEq + 'static>(kind: UserType, title: String, subtitle: String, icon: I) -> Element {
    let ctx = use_context::<AuthFormContext>();
    let mut form = ctx.form;
    let selected = form.read().user_type == kind;
    let border = if selected { "#EA580C" } else { "#E5E7EB" };
    let background = if selected { "#FFF7ED" } else { "white" };
    rsx! {
        div {
            style: "
                cursor: pointer;
                border: 2px solid {border};
                background: {background};
                border-radius: 12px;
                padding: 16px;
                text-align: center;
                display:flex;
                flex-direction: column;
                align-items: center;
                gap: 6px;
            ",
            onclick: move |_| form.write().user_type = kind,
            Icon { icon: icon, style: "width: 28px; height: 28px; color: #EA580C;" }
            div { style: "font-weight: 600;", "{title}" }
            div { style: "font-size: 13px; color: #6B7280;", "{subtitle}" }
        }
    }
}

#[component]
fn FormField<I: IconShape + Clone + PartialEq + 'static>(
    label: String,
    icon: I,
    input_type: String,
    placeholder: String,
    value: String,
    oninput: Callback<String>,
) -> Element {
    rsx! {
        label {
            style: "display:flex; flex-direction: column; gap: 6px; font-size: 14px; font-weight: 500;",
            "{label}"
            div {
                class: "afrolearn-input-box",
                Icon { icon: icon, style: "width: 16px; height: 16px; color: #6B7280;" }
                input {
                    r#type: "{input_type}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| oninput(e.value()),
                }
            }
        }
    }
}

#[component]
fn PasswordField(label: String, placeholder: String, value: String, oninput: Callback<String>) -> Element {
    let ctx = use_context::<AuthFormContext>();
    let mut show_password = ctx.show_password;
    let input_type = if show_password() { "text" } else { "password" };
    rsx! {
        label {
            style: "display:flex; flex-direction: column; gap: 6px; font-size: 14px; font-weight: 500;",
            "{label}"
            div {
                class: "afrolearn-input-box",
                Icon { icon: MdLock, style: "width: 16px; height: 16px; color: #6B7280;" }
                input {
                    r#type: "{input_type}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| oninput(e.value()),
                }
                button {
                    r#type: "button",
                    style: "border: none; background: none; cursor: pointer; display:flex;",
                    onclick: move |e| {
                        e.prevent_default();
                        show_password.set(!show_password());
                    },
                    if show_password() {
                        Icon { icon: MdVisibilityOff, style: "width: 16px; height: 16px; color: #6B7280;" }
                    } else {
                        Icon { icon: MdVisibility, style: "width: 16px; height: 16px; color: #6B7280;" }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialButtons() -> Element {
    rsx! {
        div {
            style: "display:flex; align-items:center; gap: 8px; color: #9CA3AF; font-size: 12px; text-transform: uppercase;",
            div { style: "flex: 1; height: 1px; background: #E5E7EB;" }
            "Or continue with"
            div { style: "flex: 1; height: 1px; background: #E5E7EB;" }
        }
        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
            button { class: "afrolearn-button-outline", "Google" }
            button { class: "afrolearn-button-outline", "Facebook" }
        }
    }
}
