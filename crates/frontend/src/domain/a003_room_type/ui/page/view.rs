use super::view_model::RoomTypeViewModel;
use crate::layout::navigation_menu::NavigationMenu;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::icons::icon;
use crate::shared::page::follow_redirects;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a003_room_type::aggregate::RoomType;
use contracts::domain::common::AggregateRoot;
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RoomTypePage(hotel_id: HotelId) -> impl IntoView {
    let vm = RoomTypeViewModel::new(hotel_id);
    follow_redirects(vm.page.redirect);
    vm.load();

    view! {
        <div class="page">
            <NavigationMenu current=AppRoute::RoomTypes(hotel_id) />

            <PageHeader
                title={RoomType::list_name()}
                count=Signal::derive(move || Some(vm.page.state.with(|s| s.snapshot.room_types.len())))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.page.pending.get())
                    on_click=move |_| vm.load()
                >
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            <div class="details-form">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar tipo de habitación" } else { "Nuevo tipo de habitación" }}
                </h3>
                {move || vm.page.form_error.get().map(|e| view! { <div class="error">{e}</div> })}
                <Input
                    label="Nombre"
                    required=true
                    placeholder="Ej: Estándar"
                    value=Signal::derive(move || vm.page.state.with(|s| s.form.name.clone()))
                    on_input=Callback::new(move |v: String| vm.set_name(v))
                />

                <fieldset class="form__group">
                    <legend class="form__label">"Acomodaciones"</legend>
                    {move || {
                        let catalogue = vm.page.state.with(|s| s.snapshot.catalogue.clone());
                        if catalogue.is_empty() {
                            return view! {
                                <p class="form__hint">"Primero registre acomodaciones para este hotel"</p>
                            }
                            .into_any();
                        }
                        catalogue
                            .into_iter()
                            .map(|accommodation| {
                                let id = accommodation.id;
                                view! {
                                    <Checkbox
                                        label=accommodation.name
                                        checked=Signal::derive(move || vm.is_selected(id))
                                        on_toggle=Callback::new(move |checked| vm.toggle_accommodation(id, checked))
                                        disabled=Signal::derive(move || vm.page.pending.get())
                                    />
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </fieldset>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.page.pending.get())
                        on_click=move |_| vm.submit()
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { " Guardar cambios" } else { " Agregar" }}
                    </Button>
                    <Show when=move || vm.is_edit_mode()>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_edit()>
                            {icon("cancel")}
                            " Cancelar"
                        </Button>
                    </Show>
                </div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Nombre"</TableHeaderCell>
                        <TableHeaderCell>"Acomodaciones"</TableHeaderCell>
                        <TableHeaderCell>"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = vm.page.state.with(|s| s.snapshot.room_types.clone());
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>"No hay tipos de habitación registrados"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|room_type| {
                                let id = room_type.id;
                                let accommodations = room_type.accommodation_names();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{room_type.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{accommodations}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| vm.begin_edit(id)
                                                >
                                                    {icon("edit")}
                                                    " Editar"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=Signal::derive(move || vm.page.pending.get())
                                                    on_click=move |_| vm.remove(id)
                                                >
                                                    {icon("delete")}
                                                    " Eliminar"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
