//! Facility dialog form state.
//!
//! `RwSignal` fields so the whole state is `Copy` and can be shared between
//! the page (which seeds it for edits) and the dialog (which renders it).

use aptcare_shared::{AddNewFacilityRequest, Facility};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FacilityFormState {
    /// 0 while creating; the backend id once editing.
    pub facility_id: RwSignal<i64>,
    pub facility_name: RwSignal<String>,
    pub contact_phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub address_line: RwSignal<String>,
    pub city: RwSignal<String>,
    pub pincode: RwSignal<String>,
    pub city_pincode_id: RwSignal<i64>,
    pub fee: RwSignal<f64>,
    pub active: RwSignal<bool>,
    pub status: RwSignal<String>,
}

impl FacilityFormState {
    pub fn new() -> Self {
        Self {
            facility_id: RwSignal::new(0),
            facility_name: RwSignal::new(String::new()),
            contact_phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            address_line: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            pincode: RwSignal::new(String::new()),
            city_pincode_id: RwSignal::new(0),
            fee: RwSignal::new(0.0),
            active: RwSignal::new(true),
            status: RwSignal::new(String::new()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.facility_id.get() != 0
    }

    pub fn reset(&self) {
        self.facility_id.set(0);
        self.facility_name.set(String::new());
        self.contact_phone.set(String::new());
        self.email.set(String::new());
        self.address_line.set(String::new());
        self.city.set(String::new());
        self.pincode.set(String::new());
        self.city_pincode_id.set(0);
        self.fee.set(0.0);
        self.active.set(true);
        self.status.set(String::new());
    }

    /// Seed the form from a fetched record before an edit.
    pub fn load(&self, facility: &Facility) {
        self.facility_id.set(facility.facility_id);
        self.facility_name.set(facility.facility_name.clone());
        self.contact_phone.set(facility.contact_phone.clone());
        self.email.set(facility.email.clone());
        self.address_line.set(facility.address_line.clone());
        self.city.set(facility.city.clone());
        self.pincode.set(facility.pincode.clone());
        self.city_pincode_id.set(facility.city_pincode_id);
        self.fee.set(facility.fee);
        self.active.set(facility.active_ind != 0);
        self.status.set(facility.status.clone());
    }

    pub fn to_add_request(&self, org_id: i64) -> AddNewFacilityRequest {
        AddNewFacilityRequest {
            org_id,
            facility_name: self.facility_name.get(),
            contact_phone: self.contact_phone.get(),
            email: self.email.get(),
            address_line: self.address_line.get(),
            city: self.city.get(),
            pincode: self.pincode.get(),
            city_pincode_id: self.city_pincode_id.get(),
            fee: self.fee.get(),
        }
    }

    pub fn to_facility(&self, org_id: i64) -> Facility {
        Facility {
            facility_id: self.facility_id.get(),
            org_id,
            city_pincode_id: self.city_pincode_id.get(),
            facility_name: self.facility_name.get(),
            contact_phone: self.contact_phone.get(),
            email: self.email.get(),
            address_line: self.address_line.get(),
            city: self.city.get(),
            pincode: self.pincode.get(),
            fee: self.fee.get(),
            active_ind: i32::from(self.active.get()),
            status: self.status.get(),
        }
    }
}

impl Default for FacilityFormState {
    fn default() -> Self {
        Self::new()
    }
}
