use serde::{Deserialize, Serialize};

use crate::models::{Course, Enrollment, Schedule};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub id: String,
    pub schedule: ScheduleDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub course: CourseDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub lecturer: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub schedule_id: String,
}

impl From<EnrollmentDto> for Enrollment {
    fn from(dto: EnrollmentDto) -> Self {
        Enrollment {
            id: dto.id,
            schedule: dto.schedule.into(),
        }
    }
}

impl From<ScheduleDto> for Schedule {
    fn from(dto: ScheduleDto) -> Self {
        Schedule {
            id: dto.id,
            day_of_week: dto.day_of_week,
            start_time: dto.start_time,
            end_time: dto.end_time,
            room: dto.room,
            start_date: dto.start_date,
            end_date: dto.end_date,
            course: Course {
                id: dto.course.id,
                title: dto.course.name,
                lecturer: dto.course.lecturer,
            },
        }
    }
}
