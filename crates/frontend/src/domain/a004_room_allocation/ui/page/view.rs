use super::view_model::RoomAllocationViewModel;
use crate::domain::a001_hotel::ui::info::HotelInfo;
use crate::domain::a004_room_allocation::workflow::CAPACITY_REACHED_MESSAGE;
use crate::layout::navigation_menu::NavigationMenu;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::shared::page::follow_redirects;
use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_accommodation::aggregate::AccommodationId;
use contracts::domain::a003_room_type::aggregate::RoomTypeId;
use contracts::domain::a004_room_allocation::aggregate::RoomAllocation;
use contracts::domain::common::AggregateRoot;
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RoomAllocationPage(hotel_id: HotelId) -> impl IntoView {
    let vm = RoomAllocationViewModel::new(hotel_id);
    follow_redirects(vm.page.redirect);
    vm.load();

    let room_type_options = Signal::derive(move || {
        vm.page.state.with(|s| {
            s.room_types()
                .iter()
                .map(|rt| (rt.id, rt.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let accommodation_options = Signal::derive(move || {
        vm.page.state.with(|s| {
            s.options()
                .into_iter()
                .map(|a| (a.id, a.name))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page">
            <NavigationMenu current=AppRoute::RoomAllocations(hotel_id) />

            <PageHeader
                title={RoomAllocation::list_name()}
                count=Signal::derive(move || {
                    vm.page.state.with(|s| s.snapshot.as_ref().map(|snap| snap.allocations.len()))
                })
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

            <Show when=move || vm.page.state.with(|s| s.is_loaded())>
                {move || vm.state().snapshot.map(|s| view! {
                    <HotelInfo hotel=s.hotel.clone() guard=s.guard />
                })}

                <Show when=move || vm.page.state.with(|s| s.capacity_reached())>
                    <div class="warning-box">
                        <span class="warning-box__icon">{icon("alert")}</span>
                        <span class="warning-box__text">{CAPACITY_REACHED_MESSAGE}</span>
                    </div>
                </Show>

                <div class="details-form room-allocation-form">
                    <h3>
                        {move || if vm.page.state.with(|s| s.form.is_edit_mode()) {
                            "Editar habitación"
                        } else {
                            "Agregar habitación"
                        }}
                    </h3>

                    {move || vm.page.form_error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <Input
                        label="Cantidad"
                        input_type="number"
                        min=1u32
                        required=true
                        value=Signal::derive(move || vm.page.state.with(|s| s.form.quantity.clone()))
                        on_input=Callback::new(move |v: String| vm.set_quantity(v))
                        placeholder="Ej: 10"
                        disabled=Signal::derive(move || vm.is_form_disabled())
                    />
                    <Select
                        label="Tipo de habitación"
                        value=Signal::derive(move || vm.page.state.with(|s| s.form.room_type_id))
                        options=room_type_options
                        placeholder="Seleccione un tipo"
                        on_change=Callback::new(move |id: Option<RoomTypeId>| vm.select_room_type(id))
                        disabled=Signal::derive(move || vm.is_form_disabled())
                    />
                    <Select
                        label="Acomodación"
                        value=Signal::derive(move || vm.page.state.with(|s| s.form.accommodation_id))
                        options=accommodation_options
                        placeholder="Seleccione una acomodación"
                        on_change=Callback::new(move |id: Option<AccommodationId>| vm.select_accommodation(id))
                        disabled=Signal::derive(move || vm.is_form_disabled())
                    />

                    <div class="details-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.is_form_disabled())
                            on_click=move |_| vm.submit()
                        >
                            {icon("save")}
                            {move || if vm.page.state.with(|s| s.form.is_edit_mode()) {
                                " Guardar cambios"
                            } else {
                                " Agregar"
                            }}
                        </Button>
                        <Show when=move || vm.page.state.with(|s| s.form.is_edit_mode())>
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
                            <TableHeaderCell>"Cantidad"</TableHeaderCell>
                            <TableHeaderCell>"Tipo de habitación"</TableHeaderCell>
                            <TableHeaderCell>"Acomodación"</TableHeaderCell>
                            <TableHeaderCell>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let allocations = vm.page.state.with(|s| s.allocations().to_vec());
                            if allocations.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>"No hay habitaciones registradas"</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            allocations
                                .into_iter()
                                .map(|allocation| {
                                    let id = allocation.id;
                                    let room_type = allocation.room_type_name();
                                    let accommodation = allocation.accommodation_name();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{allocation.quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{room_type}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{accommodation}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || vm.page.pending.get())
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
            </Show>
        </div>
    }
}
