use super::{logo::XLogo, messages::InlineErrorMessage};
use crate::{
    api::{ApiError, SignupField, SignupRequest},
    pages::signup::utils,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
fn SignupInput(
    field: SignupField,
    #[prop(into)] input_type: String,
    #[prop(into, optional)] class: String,
    form: Signal<SignupRequest>,
    on_input: Callback<(SignupField, String)>,
) -> impl IntoView {
    view! {
        <label class=format!("input input-bordered rounded flex items-center gap-2 {}", class)>
            <input
                type=input_type
                class="grow"
                placeholder=field.label()
                name=field.name()
                required
                prop:value=move || form.with(|f| utils::field_value(f, field).to_string())
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    if let Some(field) = SignupField::from_name(&target.name()) {
                        on_input.call((field, target.value()));
                    }
                }
            />
        </label>
    }
}

#[component]
pub fn SignupForm(
    form: Signal<SignupRequest>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_input: Callback<(SignupField, String)>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form
            class="lg:w-2/3 mx-auto md:mx-20 flex gap-4 flex-col"
            on:submit=move |ev| on_submit.call(ev)
        >
            <XLogo class="w-24 lg:hidden fill-white" />
            <h1 class="text-4xl font-extrabold text-white">"Join today."</h1>

            <SignupInput field=SignupField::Email input_type="email" form=form on_input=on_input />

            <div class="flex gap-4 flex-wrap">
                <SignupInput
                    field=SignupField::Username
                    input_type="text"
                    class="flex-1"
                    form=form
                    on_input=on_input
                />
                <SignupInput
                    field=SignupField::FullName
                    input_type="text"
                    class="flex-1"
                    form=form
                    on_input=on_input
                />
            </div>

            <SignupInput field=SignupField::Password input_type="password" form=form on_input=on_input />

            <button
                class="btn rounded-full btn-primary text-white"
                type="submit"
                disabled=move || pending.get()
            >
                {move || utils::submit_label(pending.get())}
            </button>

            <InlineErrorMessage error=error />
        </form>
    }
}
