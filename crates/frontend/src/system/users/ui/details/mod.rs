use contracts::shared::validation::ValidationErrors;
use contracts::system::users::{RegisterUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::field_error::FieldError;
use crate::shared::modal::Modal;
use crate::system::users::api;

const ROLES: [&str; 4] = ["Requester", "Technician", "Coordinator", "Administrator"];

/// Registration / edit form for one user.
///
/// Registration posts to the public endpoint and the account lands in
/// Pending until an administrator reviews it.
#[component]
pub fn UserForm(
    user: Option<User>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let is_edit = user.is_some();
    let existing = StoredValue::new(user.clone());

    let username = RwSignal::new(
        user.as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default(),
    );
    let full_name = RwSignal::new(
        user.as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let email = RwSignal::new(
        user.as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_default(),
    );
    let contact_phone = RwSignal::new(
        user.as_ref()
            .and_then(|u| u.contact_phone.clone())
            .unwrap_or_default(),
    );
    let department = RwSignal::new(
        user.as_ref()
            .and_then(|u| u.department.clone())
            .unwrap_or_default(),
    );
    let work_group = RwSignal::new(
        user.as_ref()
            .and_then(|u| u.work_group.clone())
            .unwrap_or_default(),
    );
    let staff_type = RwSignal::new(
        user.as_ref()
            .and_then(|u| u.staff_type.clone())
            .unwrap_or_default(),
    );
    let roles = RwSignal::new(user.as_ref().map(|u| u.roles.clone()).unwrap_or_default());
    let is_active = RwSignal::new(user.as_ref().map(|u| u.is_active).unwrap_or(true));

    let (error, set_error) = signal::<Option<String>>(None);
    let validation: RwSignal<Option<ValidationErrors>> = RwSignal::new(None);
    let (saving, set_saving) = signal(false);

    let opt = |value: String| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    };

    let toggle_role = move |role: &'static str, checked: bool| {
        roles.update(|list| {
            if checked {
                if !list.iter().any(|r| r == role) {
                    list.push(role.to_string());
                }
            } else {
                list.retain(|r| r != role);
            }
        });
    };

    let on_save = move |_| {
        if saving.get() {
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        validation.set(None);

        match existing.get_value() {
            Some(user) => {
                let dto = UpdateUserDto {
                    id: user.id,
                    full_name: opt(full_name.get()),
                    email: opt(email.get()),
                    contact_phone: opt(contact_phone.get()),
                    department: opt(department.get()),
                    work_group: opt(work_group.get()),
                    staff_type: opt(staff_type.get()),
                    roles: roles.get(),
                    is_active: is_active.get(),
                };
                spawn_local(async move {
                    match api::update_user(dto).await {
                        Ok(()) => on_saved.run(()),
                        Err(e) => {
                            match e.validation() {
                                Some(errors) => validation.set(Some(errors.clone())),
                                None => set_error.set(Some(format!("Failed to save: {}", e))),
                            }
                            set_saving.set(false);
                        }
                    }
                });
            }
            None => {
                let dto = RegisterUserDto {
                    username: username.get(),
                    full_name: opt(full_name.get()),
                    email: opt(email.get()),
                    contact_phone: opt(contact_phone.get()),
                    department: opt(department.get()),
                    work_group: opt(work_group.get()),
                    staff_type: opt(staff_type.get()),
                    roles: roles.get(),
                };
                spawn_local(async move {
                    match api::register_user(dto).await {
                        Ok(_) => on_saved.run(()),
                        Err(e) => {
                            match e.validation() {
                                Some(errors) => validation.set(Some(errors.clone())),
                                None => set_error.set(Some(format!("Failed to register: {}", e))),
                            }
                            set_saving.set(false);
                        }
                    }
                });
            }
        }
    };

    let validation_signal = Signal::derive(move || validation.get());
    let modal_title = if is_edit {
        format!("Edit user: {}", username.get_untracked())
    } else {
        "Register user".to_string()
    };

    view! {
        <Modal title=modal_title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Username"</Label>
                <Input
                    value=username
                    disabled=Signal::derive(move || saving.get() || is_edit)
                />
                <FieldError errors=validation_signal field="username" />
            </div>

            <Flex gap=FlexGap::Small>
                <div class="form__group" style="flex: 1;">
                    <Label>"Full name"</Label>
                    <Input value=full_name disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Email"</Label>
                    <Input
                        value=email
                        input_type=InputType::Email
                        disabled=Signal::derive(move || saving.get())
                    />
                    <FieldError errors=validation_signal field="email" />
                </div>
            </Flex>

            <Flex gap=FlexGap::Small>
                <div class="form__group" style="flex: 1;">
                    <Label>"Phone"</Label>
                    <Input value=contact_phone disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Staff type"</Label>
                    <select
                        class="form__select"
                        prop:value=move || staff_type.get()
                        on:change=move |ev| staff_type.set(event_target_value(&ev))
                    >
                        <option value="">"None (external)"</option>
                        <option value="Employee">"Employee"</option>
                        <option value="Contractor">"Contractor"</option>
                    </select>
                </div>
            </Flex>

            <Flex gap=FlexGap::Small>
                <div class="form__group" style="flex: 1;">
                    <Label>"Department"</Label>
                    <Input value=department disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group" style="flex: 1;">
                    <Label>"Work group"</Label>
                    <Input value=work_group disabled=Signal::derive(move || saving.get()) />
                </div>
            </Flex>

            <div class="form__group">
                <Label>"Roles"</Label>
                <div class="form__checkbox-row">
                    {ROLES.into_iter().map(|role| {
                        let checked = Signal::derive(move || {
                            roles.with(|list| list.iter().any(|r| r == role))
                        });
                        view! {
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |ev| {
                                        toggle_role(role, event_target_checked(&ev));
                                    }
                                />
                                {role}
                            </label>
                        }
                    }).collect_view()}
                </div>
            </div>

            {move || if is_edit {
                view! {
                    <div class="form__group">
                        <Checkbox checked=is_active label="Active" />
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() {
                        "Saving..."
                    } else if is_edit {
                        "Save"
                    } else {
                        "Register"
                    }}
                </Button>
            </div>
        </Modal>
    }
}
