use super::view_model::HotelListViewModel;
use crate::domain::a001_hotel::workflow::{HotelField, PAGE_SIZE};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::page::follow_redirects;
use contracts::domain::a001_hotel::aggregate::{Hotel, MAX_ROOM_CAPACITY};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn HotelListPage() -> impl IntoView {
    let vm = HotelListViewModel::new();
    follow_redirects(vm.page.redirect);
    vm.load();

    let field_input = move |field: HotelField, label: &'static str, placeholder: String, input_type: &'static str| {
        let numeric = input_type == "number";
        view! {
            <Input
                label=label
                input_type=input_type
                placeholder=placeholder
                required=true
                min=numeric.then_some(1u32)
                max=numeric.then_some(MAX_ROOM_CAPACITY)
                value=Signal::derive(move || vm.field(field))
                on_input=Callback::new(move |v: String| vm.set_field(field, v))
            />
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title={Hotel::list_name()}
                subtitle="Registro de hoteles y su capacidad"
                count=Signal::derive(move || Some(vm.page.state.with(|s| s.hotels.len())))
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

            <div class="details-form hotel-form">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar hotel" } else { "Nuevo hotel" }}
                </h3>

                {move || vm.page.form_error.get().map(|e| view! { <div class="error">{e}</div> })}

                {field_input(HotelField::Name, "Nombre", "Nombre del hotel".into(), "text")}
                {field_input(HotelField::Address, "Dirección", "Calle 23 #58-25".into(), "text")}
                {field_input(HotelField::City, "Ciudad", "Cartagena".into(), "text")}
                {field_input(HotelField::TaxId, "NIT", "Solo números".into(), "text")}
                {field_input(
                    HotelField::RoomCapacity,
                    "Número de habitaciones",
                    format!("1 - {}", MAX_ROOM_CAPACITY),
                    "number",
                )}

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.page.pending.get())
                        on_click=move |_| vm.submit()
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { " Guardar cambios" } else { " Crear hotel" }}
                    </Button>
                    <Show when=move || vm.is_edit_mode()>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.cancel_edit()
                        >
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
                        <TableHeaderCell>"Ciudad"</TableHeaderCell>
                        <TableHeaderCell>"Dirección"</TableHeaderCell>
                        <TableHeaderCell>"NIT"</TableHeaderCell>
                        <TableHeaderCell>"Habitaciones"</TableHeaderCell>
                        <TableHeaderCell>"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let hotels = vm.page.state.with(|s| s.visible().to_vec());
                        if hotels.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>"No hay hoteles registrados"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        hotels
                            .into_iter()
                            .map(|hotel| {
                                let id = hotel.id;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{hotel.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{hotel.city}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{hotel.address}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{hotel.tax_id}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{hotel.room_capacity}</TableCellLayout></TableCell>
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
                                                    on_click=move |_| vm.open_rooms(id)
                                                >
                                                    {icon("eye")}
                                                    " Ver habitaciones"
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

            <PaginationControls
                current_page=Signal::derive(move || vm.page.state.with(|s| s.page))
                page_size=PAGE_SIZE
                total_count=Signal::derive(move || vm.page.state.with(|s| s.hotels.len()))
                on_page_change=Callback::new(move |page| vm.go_to_page(page))
            />
        </div>
    }
}
