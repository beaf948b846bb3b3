//! Embedded University of Ghana (Legon) campus dataset.
//!
//! 25 locations and 29 two-way paths.  Path minutes are the base walking
//! time; `difficulty` multiplies it (busy roads, stairs, crowds).

use std::io::Cursor;

use nav_spatial::{load_graph_readers, CampusGraph, SpatialResult};

pub const LOCATIONS_CSV: &str = "\
key,name,latitude,longitude,category,description
main_gate,Main Gate,5.6502,-0.1860,entrance,Main entrance to UG campus
great_hall,Great Hall,5.6515,-0.1875,landmark,Iconic ceremonial hall
balme_library,Balme Library,5.6520,-0.1870,library,Main university library
admin_block,Administration Block,5.6510,-0.1865,administrative,Main administration building
arts_faculty,Faculty of Arts,5.6525,-0.1880,academic,Faculty of Arts building
science_faculty,Faculty of Science,5.6530,-0.1885,academic,Faculty of Science
engineering_faculty,College of Engineering,5.6535,-0.1890,academic,Engineering College
business_school,Business School,5.6540,-0.1895,academic,University of Ghana Business School
medical_school,Medical School,5.6545,-0.1900,academic,School of Medicine and Dentistry
legon_hall,Legon Hall,5.6480,-0.1820,residential,Premier residential hall
akuafo_hall,Akuafo Hall,5.6485,-0.1825,residential,Traditional residential hall
commonwealth_hall,Commonwealth Hall,5.6490,-0.1830,residential,Commonwealth residential hall
mensah_sarbah_hall,Mensah Sarbah Hall,5.6495,-0.1835,residential,Mensah Sarbah residential hall
volta_hall,Volta Hall,5.6500,-0.1840,residential,Volta residential hall
night_market,Night Market,5.6475,-0.1850,dining,Popular food court
jqb,JQB (Pent Hall),5.6505,-0.1845,dining,Jean Nelson Aka building
diaspora,Diaspora,5.6470,-0.1815,recreational,Student recreational center
university_hospital,University Hospital,5.6550,-0.1905,medical,Teaching hospital
gcb_bank,GCB Bank,5.6508,-0.1855,bank,Ghana Commercial Bank branch
uba_bank,UBA Bank,5.6512,-0.1858,bank,United Bank for Africa
stanbic_atm,Stanbic ATM,5.6518,-0.1862,bank,Stanbic Bank ATM
shuttle_station,Shuttle Station,5.6500,-0.1855,transport,Campus shuttle stop
taxi_rank,Taxi Rank,5.6498,-0.1852,transport,Main taxi station
car_park_a,Car Park A,5.6515,-0.1850,parking,Main parking area
car_park_b,Car Park B,5.6520,-0.1885,parking,Academic area parking
";

pub const EDGES_CSV: &str = "\
from,to,distance_m,base_minutes,difficulty,path_type,bidirectional
main_gate,admin_block,200,2.5,1.2,main_road,true
main_gate,shuttle_station,150,2.0,1.1,walkway,true
main_gate,taxi_rank,100,1.5,1.1,walkway,true
admin_block,great_hall,300,3.5,1.0,ceremonial_path,true
admin_block,balme_library,250,3.0,1.1,walkway,true
great_hall,balme_library,200,2.5,1.0,walkway,true
balme_library,arts_faculty,300,3.5,1.2,academic_path,true
arts_faculty,science_faculty,250,3.0,1.1,academic_path,true
science_faculty,engineering_faculty,200,2.5,1.0,academic_path,true
engineering_faculty,business_school,300,3.5,1.1,academic_path,true
business_school,medical_school,250,3.0,1.0,academic_path,true
legon_hall,akuafo_hall,200,2.5,1.0,residential_path,true
akuafo_hall,commonwealth_hall,250,3.0,1.0,residential_path,true
commonwealth_hall,mensah_sarbah_hall,200,2.5,1.0,residential_path,true
mensah_sarbah_hall,volta_hall,150,2.0,1.0,residential_path,true
volta_hall,admin_block,400,5.0,1.3,main_road,true
legon_hall,night_market,300,3.5,1.4,busy_path,true
commonwealth_hall,balme_library,500,6.0,1.2,campus_road,true
night_market,jqb,400,5.0,1.5,food_court_area,true
jqb,volta_hall,200,2.5,1.2,walkway,true
night_market,diaspora,300,3.5,1.3,student_area,true
gcb_bank,admin_block,150,2.0,1.1,service_road,true
uba_bank,gcb_bank,100,1.5,1.0,banking_area,true
stanbic_atm,balme_library,200,2.5,1.1,walkway,true
shuttle_station,taxi_rank,80,1.0,1.2,transport_area,true
shuttle_station,car_park_a,150,2.0,1.1,parking_road,true
car_park_a,car_park_b,400,5.0,1.0,parking_road,true
medical_school,university_hospital,200,2.5,1.0,medical_complex,true
university_hospital,car_park_b,300,3.5,1.1,hospital_road,true
";

/// Load the embedded campus graph.
pub fn build_campus() -> SpatialResult<CampusGraph> {
    load_graph_readers(Cursor::new(LOCATIONS_CSV), Cursor::new(EDGES_CSV))
}
